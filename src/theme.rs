// Shared design tokens and base styles, injected once per page.

pub const TOKENS: &str = r#"
:root {
    --primary: #6366f1;
    --primary-dark: #4f46e5;
    --accent: #8b5cf6;
    --secondary: #06b6d4;
    --success: #10b981;
    --warning: #f59e0b;
    --error: #ef4444;

    --bg-dark: #0a0a0f;
    --bg-gradient: linear-gradient(135deg, #0a0a0f 0%, #1a1a2e 50%, #16213e 100%);
    --card-dark: #1a1a2e;
    --card-border: #2a2a3e;
    --text-primary: #ffffff;
    --text-secondary: #a1a1aa;
    --text-muted: #71717a;

    --radius-xl: 24px;
    --radius-lg: 16px;
    --radius-md: 12px;
    --shadow-dark: 0 10px 25px rgba(0, 0, 0, 0.3);
    --shadow-glow: 0 0 30px rgba(99, 102, 241, 0.2);
}

html { scroll-behavior: smooth; -webkit-text-size-adjust: 100%; }
body {
    margin: 0;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    -webkit-font-smoothing: antialiased;
    -moz-osx-font-smoothing: grayscale;
    background: var(--bg-dark);
    color: var(--text-primary);
}
a { color: inherit; }

.sr-only {
    position: absolute;
    width: 1px;
    height: 1px;
    padding: 0;
    margin: -1px;
    overflow: hidden;
    clip: rect(0, 0, 0, 0);
    border: 0;
}

.btn {
    position: relative;
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: .5rem;
    padding: .75rem 1.25rem;
    border-radius: 12px;
    font-weight: 600;
    min-height: 44px;
    font-size: 16px;
    text-decoration: none;
    border: none;
    cursor: pointer;
    overflow: hidden;
    transition: transform .15s ease, box-shadow .2s ease, filter .2s ease;
    -webkit-tap-highlight-color: transparent;
    user-select: none;
}
.btn:active { transform: translateY(1px) scale(.98); }
.btn-primary { background: var(--primary); color: var(--text-primary); box-shadow: var(--shadow-glow); }
.btn-primary:hover { background: var(--primary-dark); }
.btn-dark { background: var(--card-dark); color: var(--text-primary); border: 1px solid var(--card-border); }
.btn-dark:hover { background: var(--card-border); }
.btn-ghost { border: 1px solid var(--card-border); background: var(--card-dark); color: var(--text-secondary); }
.btn-ghost:hover { background: var(--card-border); color: var(--text-primary); }
.btn .spark {
    position: absolute;
    inset: 0;
    background: radial-gradient(600px circle at var(--x, 50%) var(--y, 50%), rgba(255, 255, 255, .25), transparent 40%);
    opacity: 0;
    transition: opacity .25s ease;
    border-radius: inherit;
}
.btn:hover .spark { opacity: 1; }

[data-reveal] {
    opacity: 0;
    transform: translateY(12px);
    transition: opacity .6s cubic-bezier(.22, .61, .36, 1), transform .6s cubic-bezier(.22, .61, .36, 1);
}
[data-reveal].is-visible { opacity: 1; transform: none; }

@keyframes float { 0%, 100% { transform: translateY(0); } 50% { transform: translateY(-6px); } }
.float { animation: float 6s ease-in-out infinite; }

@media (prefers-reduced-motion: reduce) {
    html { scroll-behavior: auto; }
    .float { animation: none; }
    [data-reveal] { opacity: 1; transform: none; }
    .btn { transition: none; }
}
"#;
