// src/templates/layout.rs
use super::html_escape;

const STYLES: &str = r#"
    :root {
        --bg: #0f1115;
        --bg-card: rgba(255, 255, 255, 0.04);
        --border-color: rgba(255, 255, 255, 0.12);
        --primary-color: #3b82f6;
        --warning-color: #f59e0b;
        --text-color: #e5e7eb;
        --text-muted: #9ca3af;
        --border-radius: 12px;
    }
    body { margin: 0; background: var(--bg); color: var(--text-color); font-family: system-ui, sans-serif; }
    a { color: var(--primary-color); }
    .container { max-width: 1100px; margin: 0 auto; padding: 0 1.5rem; }
    .header, .footer { border-color: var(--border-color); padding: 1rem 0; }
    .header-content { display: flex; justify-content: space-between; align-items: center; }
    .nav a { margin-left: 1rem; text-decoration: none; }
    .section { margin: 3rem 0; }
    .btn { display: inline-block; padding: 0.6rem 1.2rem; border-radius: 8px; text-decoration: none; border: 1px solid var(--primary-color); }
    .btn-primary { background: var(--primary-color); color: #fff; }
    .activity-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 1.5rem; }
    .activity-card { background: var(--bg-card); border: 1px solid var(--border-color); border-radius: var(--border-radius); padding: 1.5rem; }
    .activity-card-header { display: flex; justify-content: space-between; align-items: center; }
    .activity-loading, .activity-failed { text-align: center; min-height: 120px; }
    .activity-footer { display: flex; justify-content: center; margin-top: 1.5rem; }
    .commit-row, .release-row { display: block; padding: 0.75rem; border-radius: 8px; color: inherit; text-decoration: none; }
    .commit-row:hover, .release-row:hover { background: var(--bg-card); }
    .commit-meta, .release-date { color: var(--text-muted); font-size: 0.8rem; }
    .commit-meta span { margin-right: 1rem; }
    .release-header { display: flex; justify-content: space-between; align-items: center; }
    .badge-warning { color: var(--warning-color); border: 1px solid var(--warning-color); border-radius: 999px; padding: 0 0.5rem; font-size: 0.75rem; }
    .empty-state { color: var(--text-muted); text-align: center; }
    .spinner { width: 32px; height: 32px; margin: 1rem auto; border: 3px solid var(--border-color); border-top-color: var(--primary-color); border-radius: 50%; animation: spin 1s linear infinite; }
    @keyframes spin { to { transform: rotate(360deg); } }
    .code-block { margin: 1rem 0; border: 1px solid var(--border-color); border-radius: 8px; overflow: hidden; }
    .code-header { display: flex; justify-content: space-between; padding: 0.4rem 1rem; background: rgba(255, 255, 255, 0.08); font-family: monospace; font-size: 0.75rem; }
    .code-block pre { margin: 0; padding: 0.5rem 0.75rem; background: #1a1b26; color: #a9b1d6; overflow-x: auto; font-size: 0.8rem; }
    .line-no { display: inline-block; width: 2.5rem; padding-right: 1rem; text-align: right; color: var(--text-muted); user-select: none; }
    .code-toggle-bar { display: flex; justify-content: center; padding: 0.4rem; background: #1a1b26; border-top: 1px solid var(--border-color); }
"#;

const SCRIPT: &str = r#"
    document.addEventListener('click', async (event) => {
        const copy = event.target.closest('.code-copy');
        if (copy) {
            try {
                await navigator.clipboard.writeText(copy.dataset.code);
                copy.textContent = 'Copied';
                clearTimeout(copy.copiedTimer);
                copy.copiedTimer = setTimeout(() => { copy.textContent = 'Copy'; }, 2000);
            } catch (err) {
                console.error('Failed to copy:', err);
            }
            return;
        }
        const toggle = event.target.closest('.code-toggle');
        if (toggle) {
            const rest = document.querySelector('#' + toggle.dataset.target + ' .code-rest');
            const expanded = toggle.dataset.expanded !== 'true';
            rest.hidden = !expanded;
            toggle.dataset.expanded = String(expanded);
            toggle.textContent = expanded ? toggle.dataset.less : toggle.dataset.more;
        }
    });

    document.querySelectorAll('[data-activity-src]').forEach(async (panel) => {
        const fallback = () => {
            const template = document.getElementById(panel.dataset.activityFallback);
            if (template && panel.isConnected) {
                panel.replaceChildren(template.content.cloneNode(true));
            }
        };
        try {
            const response = await fetch(panel.dataset.activitySrc);
            if (!response.ok) {
                console.error('Error fetching activity: HTTP', response.status);
                fallback();
                return;
            }
            const html = await response.text();
            if (panel.isConnected) {
                panel.innerHTML = html;
            }
        } catch (err) {
            console.error('Error fetching activity:', err);
            fallback();
        }
    });
"#;

pub fn render_page(title: &str, description: &str, repo_url: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="description" content="{}">
    <title>{} | WolfGuard</title>
    <style>{}</style>
</head>
<body>
    <header class="header">
        <div class="container">
            <div class="header-content">
                <div class="logo">
                    <a href="/">WolfGuard</a>
                </div>
                <nav class="nav">
                    <a href="/">Home</a>
                    <a href="{}" target="_blank" rel="noopener noreferrer">GitHub</a>
                </nav>
            </div>
        </div>
    </header>

    <main class="main">
        <div class="container">
            {}
        </div>
    </main>

    <footer class="footer">
        <div class="container">
            <p>WolfGuard - Open-source VPN server with TLS 1.3 / DTLS 1.3</p>
        </div>
    </footer>
    <script>{}</script>
</body>
</html>"#,
        html_escape(description),
        html_escape(title),
        STYLES,
        html_escape(repo_url),
        content,
        SCRIPT
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_wraps_content() {
        let html = render_page(
            "Contribute",
            "Join \"us\"",
            "https://github.com/acme/vpn",
            "<p>body</p>",
        );

        assert!(html.contains("<title>Contribute | WolfGuard</title>"));
        assert!(html.contains(r#"content="Join &quot;us&quot;""#));
        assert!(html.contains("<p>body</p>"));
        assert!(html.contains(r#"<a href="https://github.com/acme/vpn" target="_blank""#));
        assert!(!html.contains("dantte-lp"));
    }

    #[test]
    fn test_script_falls_back_and_resets_copy_timer() {
        let html = render_page("Contribute", "", "https://github.com/acme/vpn", "");

        assert!(html.contains("panel.dataset.activityFallback"));
        assert_eq!(html.matches("fallback();").count(), 2);
        assert!(html.contains("clearTimeout(copy.copiedTimer)"));
    }
}
