// src/templates/index.rs
use chrono::Utc;

use super::code_block::CodeBlock;
use super::{activity, render_page};
use crate::models::{ActivityFetchState, CodeListing};

const APT_INSTALL: &str = r#"# Add WolfGuard repository
curl -fsSL https://packages.wolfguard.io/gpg.key | sudo gpg --dearmor -o /usr/share/keyrings/wolfguard.gpg
echo "deb [signed-by=/usr/share/keyrings/wolfguard.gpg] https://packages.wolfguard.io/debian stable main" | \
  sudo tee /etc/apt/sources.list.d/wolfguard.list

# Update package index
sudo apt update

# Install WolfGuard
sudo apt install -y wolfguard

# Enable and start service
sudo systemctl enable wolfguard
sudo systemctl start wolfguard

# Verify installation
wolfguard --version
sudo systemctl status wolfguard"#;

const COMPOSE_FILE: &str = r#"name: wolfguard

services:
  wolfguard:
    image: ghcr.io/dantte-lp/wolfguard:latest
    container_name: wolfguard-vpn
    restart: unless-stopped

    cap_add:
      - NET_ADMIN
      - NET_BIND_SERVICE

    ports:
      - "443:443/tcp"   # TLS 1.3
      - "443:443/udp"   # DTLS 1.3

    volumes:
      - ./config:/etc/wolfguard:ro
      - ./certs:/etc/wolfguard/certs:ro
      - wolfguard-data:/var/lib/wolfguard

    environment:
      WOLFGUARD_LOG_LEVEL: info
      TZ: UTC

volumes:
  wolfguard-data:"#;

const CLONE: &str = r#"git clone https://github.com/dantte-lp/wolfguard.git
cd wolfguard"#;

/// Host page: the activity panel mounts in `Loading` and is swapped for the
/// `/activity` fragment once it settles.
pub fn render(repo_url: &str) -> String {
    let panel = activity::render(&ActivityFetchState::Loading, Utc::now(), repo_url);
    let fallback = activity::render(
        &ActivityFetchState::Failed {
            reason: String::new(),
        },
        Utc::now(),
        repo_url,
    );

    let snippets = [
        ("cb-apt", CodeListing::new(APT_INSTALL).language("bash").collapse_at(15)),
        (
            "cb-compose",
            CodeListing::new(COMPOSE_FILE)
                .language("yaml")
                .filename("compose.yaml")
                .collapse_at(12)
                .line_numbers(),
        ),
        ("cb-clone", CodeListing::new(CLONE)),
    ]
    .into_iter()
    .map(|(id, listing)| CodeBlock::new(listing).render(id))
    .collect::<Vec<_>>();

    let content = format!(
        r#"
    <div class="section">
        <h1>Contribute to WolfGuard</h1>
        <p>
            WolfGuard is an open-source VPN server compatible with Cisco Secure Client,
            built on wolfSSL with TLS 1.3 and DTLS 1.3.
        </p>
    </div>

    <div class="section">
        <h2>Quick Start</h2>
        <h3>Package Manager (APT)</h3>
        {}
        <h3>Docker Compose</h3>
        {}
        <h3>Build from Source</h3>
        {}
    </div>

    <div class="section" data-activity-src="/activity" data-activity-fallback="activity-fallback">
        {}
    </div>
    <template id="activity-fallback">
        {}
    </template>
    "#,
        snippets[0], snippets[1], snippets[2], panel, fallback
    );

    render_page(
        "Contribute",
        "Latest development activity, releases, and quick start for the WolfGuard VPN server.",
        repo_url,
        &content,
    )
}
