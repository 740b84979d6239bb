/// Site-wide stylesheet. Both palettes key off `data-theme` on `<html>`.
pub const APP_CSS: &str = r#"
:root, [data-theme="dark"] {
    --bg: #141414;
    --surface: rgba(30, 30, 30, 0.8);
    --text: #f2f2f2;
    --muted: rgba(255, 255, 255, 0.7);
    --accent: #7EB2FF;
    --border: rgba(30, 144, 255, 0.15);
    --error: #ff6b6b;
}
[data-theme="light"] {
    --bg: #f7f8fa;
    --surface: #ffffff;
    --text: #1a1a1a;
    --muted: #555;
    --accent: #1e6fe0;
    --border: rgba(30, 111, 224, 0.2);
    --error: #c62828;
}
body {
    margin: 0;
    background: var(--bg);
    color: var(--text);
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    transition: background 0.3s ease, color 0.3s ease;
}
.top-nav {
    position: fixed;
    top: 0;
    width: 100%;
    z-index: 100;
    transition: background 0.3s ease;
}
.top-nav.scrolled {
    background: var(--surface);
    backdrop-filter: blur(10px);
    border-bottom: 1px solid var(--border);
}
.nav-content {
    max-width: 1200px;
    margin: 0 auto;
    padding: 1rem 2rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}
.nav-logo {
    font-weight: 700;
    font-size: 1.4rem;
    color: var(--text);
    text-decoration: none;
}
.nav-right {
    display: flex;
    align-items: center;
    gap: 1.5rem;
}
.nav-link {
    color: var(--muted);
    text-decoration: none;
}
.burger-menu {
    display: none;
    background: none;
    border: none;
}
.burger-menu span {
    display: block;
    width: 24px;
    height: 2px;
    margin: 5px 0;
    background: var(--text);
}
.theme-toggle {
    background: none;
    border: 1px solid var(--border);
    border-radius: 50%;
    width: 36px;
    height: 36px;
    color: var(--text);
    cursor: pointer;
}
.cta-button, .nav-cta-button {
    background: var(--accent);
    color: #fff;
    border: none;
    border-radius: 8px;
    padding: 0.8rem 1.6rem;
    font-size: 1rem;
    cursor: pointer;
}
.cta-button:disabled {
    opacity: 0.6;
    cursor: not-allowed;
}
.secondary-button {
    background: transparent;
    color: var(--text);
    border: 1px solid var(--border);
    border-radius: 8px;
    padding: 0.8rem 1.6rem;
    text-decoration: none;
    cursor: pointer;
}
.hero {
    min-height: 80vh;
    display: flex;
    align-items: center;
    justify-content: center;
    text-align: center;
    padding: 6rem 2rem 2rem;
}
.hero-content { max-width: 760px; }
.hero h1 { font-size: 3rem; line-height: 1.1; }
.hero-tag { color: var(--accent); text-transform: uppercase; letter-spacing: 0.1em; }
.hero-subtitle { color: var(--muted); font-size: 1.2rem; }
.hero-actions { display: flex; gap: 1rem; justify-content: center; margin-top: 2rem; }
.steps-section, .faq-section, .quick-upload-section {
    max-width: 1100px;
    margin: 0 auto;
    padding: 4rem 2rem;
}
.steps-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
    gap: 1.5rem;
}
.step-card, .quick-upload-card, .faq-item, .modal {
    background: var(--surface);
    border: 1px solid var(--border);
    border-radius: 16px;
    padding: 1.5rem;
}
.step-number { color: var(--accent); font-size: 2rem; font-weight: 700; }
.quick-upload-section {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 2rem;
    align-items: center;
}
.lead-form .form-row { display: flex; flex-direction: column; margin-bottom: 1rem; }
.lead-form label { margin-bottom: 0.4rem; color: var(--muted); }
.lead-form input, .lead-form textarea {
    background: transparent;
    color: var(--text);
    border: 1px solid var(--border);
    border-radius: 8px;
    padding: 0.7rem;
    font: inherit;
}
.field-error { color: var(--error); font-size: 0.85rem; margin: 0.3rem 0 0; }
.file-chip { font-size: 0.85rem; color: var(--accent); margin-top: 0.3rem; }
.form-actions { display: flex; gap: 1rem; }
.loading-spinner {
    display: inline-block;
    width: 14px;
    height: 14px;
    border: 2px solid rgba(255, 255, 255, 0.3);
    border-radius: 50%;
    border-top-color: #fff;
    animation: spin 1s ease-in-out infinite;
}
@keyframes spin { to { transform: rotate(360deg); } }
.faq-item { margin-bottom: 1rem; padding: 0; scroll-margin-top: 5rem; }
.faq-heading { display: flex; align-items: center; margin: 0; font-size: inherit; }
.faq-permalink { padding: 0 1.2rem; color: var(--muted); text-decoration: none; opacity: 0; }
.faq-item:hover .faq-permalink, .faq-permalink:focus { opacity: 1; }
.faq-question {
    width: 100%;
    display: flex;
    justify-content: space-between;
    background: none;
    border: none;
    color: var(--text);
    padding: 1.2rem 1.5rem;
    font-size: 1.05rem;
    cursor: pointer;
}
.faq-answer { padding: 0 1.5rem 1rem; color: var(--muted); }
.modal-backdrop {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.6);
    display: flex;
    align-items: center;
    justify-content: center;
    z-index: 200;
}
.modal { width: 100%; max-width: 560px; max-height: 90vh; overflow-y: auto; position: relative; }
.modal-close {
    position: absolute;
    top: 1rem;
    right: 1rem;
    background: none;
    border: none;
    color: var(--muted);
    font-size: 1.2rem;
    cursor: pointer;
}
.modal-subtitle { color: var(--muted); }
.lead-form-complete { text-align: center; }
.complete-icon { font-size: 3rem; }
.toast-stack {
    position: fixed;
    bottom: 1.5rem;
    right: 1.5rem;
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
    z-index: 300;
}
.toast {
    display: flex;
    align-items: flex-start;
    gap: 0.75rem;
    min-width: 280px;
    max-width: 380px;
    background: var(--surface);
    border: 1px solid var(--border);
    border-left: 4px solid var(--accent);
    border-radius: 10px;
    padding: 0.9rem 1rem;
    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.3);
}
.toast p { margin: 0.2rem 0 0; color: var(--muted); }
.toast-error { border-left-color: var(--error); }
.toast-celebrate { border-left-color: #f5b400; }
.toast-close { background: none; border: none; color: var(--muted); cursor: pointer; }
.site-footer { border-top: 1px solid var(--border); padding: 2rem; text-align: center; color: var(--muted); }
.footer-links { display: flex; gap: 1.5rem; justify-content: center; }
.footer-links a { color: var(--muted); }
@media (max-width: 768px) {
    .burger-menu { display: block; }
    .nav-right { display: none; }
    .nav-right.mobile-menu-open {
        display: flex;
        flex-direction: column;
        position: absolute;
        top: 100%;
        left: 0;
        right: 0;
        background: var(--surface);
        padding: 1.5rem;
    }
    .hero h1 { font-size: 2.2rem; }
    .quick-upload-section { grid-template-columns: 1fr; }
}
"#;
