use chrono::Datelike;
use yew::prelude::*;

use crate::components::forms::{ContactForm, JoinForm};
use crate::components::intro_overlay::IntroOverlay;
use crate::components::lightbox::DiagramLightbox;
use crate::components::media::{FallbackImage, FallbackVideo};
use crate::components::nav::Nav;
use crate::components::reveal::use_scroll_reveal;
use crate::components::sections::{Card, FounderCard, Pill, RoadmapCard, Section, Stat, Step};
use crate::config;
use crate::theme;

#[function_component(Landing)]
pub fn landing() -> Html {
    use_scroll_reveal();

    let hero_video = config::asset_url(config::HERO_VIDEO_PATH);
    let logo_src = config::asset_url(config::LOGO_PATH);
    let year = chrono::Local::now().year();

    html! {
        <div class="landing-page">
            <style>{theme::TOKENS}</style>
            <style>{LANDING_STYLES}</style>

            <IntroOverlay />
            <Nav />

            <section id="home" class="hero">
                <div class="container hero-grid">
                    <div class="hero-copy">
                        <div class="hero-intro" data-reveal="">
                            <h1>{"AI powered scheduling and XRPL payments"}</h1>
                            <p class="hero-pitch">
                                {"One platform for the three pillars of organized activity: scheduling, payments, communication. Starting in sports then expanding to every sector."}
                            </p>
                            <div class="hero-cta-group">
                                <a href="#demo" class="btn btn-primary">
                                    <span class="spark" aria-hidden="true"></span>
                                    {"Watch demo"}
                                </a>
                                <a href="#roadmap" class="btn btn-ghost">{"View roadmap"}</a>
                            </div>
                        </div>
                        <div class="grid grid-3 hero-stats">
                            <Stat label="Fee savings" value="50 to 70 percent" />
                            <Stat label="Admin time saved" value="35 percent" />
                            <Stat label="Pilot tx volume" value="> 10k in 90 days" />
                        </div>
                    </div>

                    <div class="hero-media">
                        <div data-reveal="">
                            <div class="hero-video-frame float">
                                <FallbackVideo src={hero_video.clone()} class="hero-video" ambient=true />
                            </div>
                        </div>
                        <div class="grid grid-3 hero-pills">
                            <Pill text="3 to 4s settlement" />
                            <Pill text="~0.000015 XRP fee" />
                            <Pill text="XRPL Hooks and Channels" />
                        </div>
                    </div>
                </div>
            </section>

            <Section
                id="about"
                title="About Networkof.One"
                subtitle={AttrValue::from("Give everything with love and respect - our work is tech with purpose")}
            >
                <div class="prose" data-reveal="">
                    <p>
                        {"Networkof.One unifies scheduling, payments, and communication in a single mobile first experience. We launch in the Oregon sports market with 150 to 175 officials, then expand West Coast, USA, and globally."}
                    </p>
                    <p>
                        {"The platform is backward compatible so organizations can migrate from legacy tools in minutes. This build is more than a POC and ready for real world pilots."}
                    </p>
                </div>
                <div class="grid grid-2 founders">
                    <FounderCard name="Emery Frazier" role="Founder - Sports official - Community leader" />
                    <FounderCard name="Muhammad Saad Khalil" role="Lead XRPL developer - Systems architect" />
                </div>
            </Section>

            <Section id="how" title="How it works" subtitle={AttrValue::from("Simple flow for schedulers, referees, and admins")}>
                <ol class="grid grid-3 steps">
                    <Step title="Sign up" text="Create an account as scheduler, referee, or organization." />
                    <Step title="Schedule" text="AI assisted game creation and assignment." />
                    <Step title="Accept" text="Referees accept and confirm games in app." />
                    <Step title="Check in" text="GPS check in at venue to verify arrival." />
                    <Step title="Payout" text="XRPL triggered payout flow - testnet or mock for pilots." />
                    <Step title="Track" text="Real time status, notifications, and reports." />
                </ol>
            </Section>

            <Section id="tech" title="Technical overview" subtitle={AttrValue::from("Built for speed, cost, and scale on XRPL")}>
                <div class="grid grid-3">
                    <Card
                        title="XRPL integration"
                        items={vec![
                            "Payment Channels for instant micro payouts",
                            "Hooks to automate referral residuals",
                            "Multi currency support for cross border",
                            "WebSocket and JSON RPC for realtime",
                        ]}
                    />
                    <Card
                        title="Security"
                        items={vec!["Multi sig wallets", "MFA and encrypted keys", "Tangem support", "Offline fallbacks"]}
                    />
                    <Card
                        title="Architecture"
                        items={vec![
                            "Modular services and domain use cases",
                            "Realtime updates and analytics",
                            "High throughput and low fee design",
                            "Portable to other verticals",
                        ]}
                    />
                </div>
                <DiagramLightbox />
            </Section>

            <Section id="roadmap" title="Roadmap and milestones" subtitle={AttrValue::from("Twelve month path from pilot to scale")}>
                <div class="grid grid-4">
                    <RoadmapCard
                        phase="Months 1 to 2"
                        bullets={vec!["Finalize MVP and XRPL hooks", "Pilot contracts and import tools", "QA and field testing"]}
                    />
                    <RoadmapCard
                        phase="Months 3 to 4"
                        bullets={vec!["Oregon pilot - 150 to 175 officials", "~400 games in 60 days", "Publish metrics and learnings"]}
                    />
                    <RoadmapCard
                        phase="Months 5 to 6"
                        bullets={vec!["West Coast preparation", "Sport templates and migration", "Summit for adoption"]}
                    />
                    <RoadmapCard
                        phase="Months 7 to 12"
                        bullets={vec!["Scale to 2 to 4 states", "Education and community pilots", "XRPL partners and open tools"]}
                    />
                </div>
            </Section>

            <Section id="market" title="Market and sustainability" subtitle={AttrValue::from("Real adoption and real value at low cost")}>
                <div class="grid grid-2">
                    <div class="prose" data-reveal="">
                        <h4>{"Sports first"}</h4>
                        <p>
                            {"Oregon market size about 4M. Target 3 to 12 percent share in year one. Expand to West Coast then USA then global."}
                        </p>
                        <ul>
                            <li>{"Oregon revenue target: 60k to 240k"}</li>
                            <li>{"West Coast target: 600k to 2.4M"}</li>
                            <li>{"USA target: 3M to 12M"}</li>
                            <li>{"Global sports target: 30M to 100M"}</li>
                        </ul>
                        <h4>{"Monetization"}</h4>
                        <ul>
                            <li>{"Transparent platform fee per transaction"}</li>
                            <li>{"Subscription plans for schools and leagues"}</li>
                            <li>{"Referral residuals for ambassadors"}</li>
                            <li>{"Analytics and premium scheduling add ons"}</li>
                        </ul>
                    </div>
                    <div class="card">
                        <div class="placeholder-block placeholder-wide">{"Market graphic placeholder"}</div>
                        <div class="grid grid-2 market-stats">
                            <Stat label="Tx speed" value="3 to 4 seconds" />
                            <Stat label="Avg fee" value="~0.000015 XRP" />
                            <Stat label="Admin time" value="-35 percent" />
                            <Stat label="Fee savings" value="50 to 70 percent" />
                        </div>
                    </div>
                </div>
            </Section>

            <Section id="demo" title="Proof of concept - MVP demo" subtitle={AttrValue::from("See the system in action - video and screenshots")}>
                <div class="grid grid-2" data-reveal="">
                    <div class="demo-video-frame">
                        <FallbackVideo src={hero_video} class="demo-video" />
                    </div>
                    <div class="grid grid-2 screenshots">
                        { for (1..=4).map(|i| html! {
                            <div class="placeholder-block placeholder-phone">{format!("Screenshot {}", i)}</div>
                        }) }
                    </div>
                </div>
                <div class="demo-links" data-reveal="">
                    <p>{"Need test access for reviewers - provide sandbox credentials and APK or TestFlight links here."}</p>
                    <ul>
                        <li>{"Download APK: "}<a href="#">{"link"}</a></li>
                        <li>{"iOS TestFlight: "}<a href="#">{"link"}</a></li>
                        <li>{"Docs and code: "}<a href="#">{"link"}</a></li>
                    </ul>
                </div>
            </Section>

            <Section id="join" title="Join the network" subtitle={AttrValue::from("Officials, schools, developers, partners - help us build and scale")}>
                <JoinForm />
            </Section>

            <Section id="contact" title="Contact us" subtitle={AttrValue::from("Questions and partnerships - we would love to hear from you")}>
                <ContactForm />
                <div class="contact-details" data-reveal="">
                    <p>
                        {"Email: "}
                        <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                    </p>
                    <p>{"Location: Oregon, USA"}</p>
                </div>
            </Section>

            <Section id="press" title="Grant and press" subtitle={AttrValue::from("Review materials and media assets")}>
                <div class="grid grid-2" data-reveal="">
                    <div class="card">
                        <h4 class="card-title">{"Reviewer kit"}</h4>
                        <ul class="card-list">
                            <li><a href="#">{"Executive summary PDF"}</a></li>
                            <li><a href="#">{"Pitch deck PDF"}</a></li>
                            <li><a href="#">{"System diagram"}</a></li>
                            <li><a href="#">{"Demo video"}</a></li>
                            <li><a href="#">{"Code and docs"}</a></li>
                        </ul>
                    </div>
                    <div class="card">
                        <h4 class="card-title">{"Media kit"}</h4>
                        <ul class="card-list">
                            <li>{"Logos and brand marks"}</li>
                            <li>{"App screenshots"}</li>
                            <li>{"Founder bios and photos"}</li>
                            <li>{"Press release - XRPL grant submission"}</li>
                        </ul>
                    </div>
                </div>
            </Section>

            <footer class="site-footer">
                <div class="container footer-row">
                    <div class="footer-brand">
                        <FallbackImage src={logo_src} alt="Networkof.One" class="footer-logo" />
                        <span>{format!("© {} Networkof.One. All rights reserved.", year)}</span>
                    </div>
                    <div class="footer-links">
                        <a href="#">{"Privacy"}</a>
                        <a href="#">{"Terms"}</a>
                        <a href="#">{"XRPL community"}</a>
                    </div>
                </div>
            </footer>
        </div>
    }
}

const LANDING_STYLES: &str = r#"
.landing-page {
    min-height: 100vh;
    width: 100%;
    background: var(--bg-gradient);
    padding-bottom: calc(env(safe-area-inset-bottom) + 88px);
}
.container {
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 2rem;
}
.grid { display: grid; gap: 1.5rem; }
.grid-2 { grid-template-columns: repeat(2, minmax(0, 1fr)); }
.grid-3 { grid-template-columns: repeat(3, minmax(0, 1fr)); }
.grid-4 { grid-template-columns: repeat(4, minmax(0, 1fr)); }

/* Header */
.site-header {
    position: sticky;
    top: 0;
    z-index: 50;
    border-bottom: 1px solid var(--card-border);
    background: rgba(26, 26, 46, 0.8);
    backdrop-filter: blur(8px);
    transition: box-shadow .2s ease;
}
.site-header.scrolled { box-shadow: var(--shadow-dark); }
.header-content {
    position: relative;
    z-index: 51;
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 2rem;
    height: 4rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}
.nav-logo {
    display: flex;
    align-items: center;
    gap: .5rem;
    font-weight: 600;
    font-size: 1.25rem;
    text-decoration: none;
}
.nav-logo img { height: 2rem; width: auto; border-radius: 6px; }
.nav-desktop { display: flex; align-items: center; gap: 1.5rem; font-size: .875rem; }
.nav-link {
    position: relative;
    padding: .25rem;
    color: var(--text-secondary);
    text-decoration: none;
}
.nav-link:hover { color: var(--text-primary); }
.nav-link::after {
    content: '';
    position: absolute;
    left: 0;
    bottom: -4px;
    height: 2px;
    width: 0;
    background: var(--primary);
    transition: width .2s ease;
}
.nav-link:hover::after { width: 100%; }
.header-cta { padding: .4rem .6rem; border-radius: 10px; font-size: 14px; min-height: 32px; margin-left: 1rem; }
.burger-menu {
    display: none;
    width: 2.5rem;
    height: 2.5rem;
    align-items: center;
    justify-content: center;
    border-radius: 8px;
    border: 1px solid var(--card-border);
    background: var(--card-dark);
    color: var(--text-primary);
    cursor: pointer;
}
.mobile-menu {
    z-index: 70;
    display: grid;
    gap: .25rem;
    padding: .75rem 1rem;
    border-top: 1px solid var(--card-border);
    background: var(--card-dark);
    animation: slideDown .2s ease-out;
}
@keyframes slideDown {
    from { opacity: 0; transform: translateY(-10px); }
    to { opacity: 1; transform: translateY(0); }
}
.mobile-menu-item {
    min-height: 48px;
    display: flex;
    align-items: center;
    padding: 0 1rem;
    border-radius: 8px;
    color: var(--text-secondary);
    text-decoration: none;
    -webkit-tap-highlight-color: transparent;
}
.mobile-menu-item:hover { background: var(--card-border); color: var(--text-primary); }
.mobile-menu-cta { padding-top: .75rem; margin-top: .5rem; border-top: 1px solid var(--card-border); }
.mobile-menu-cta .btn { width: 100%; }

/* Intro overlay */
.intro-overlay {
    position: fixed;
    inset: 0;
    z-index: 60;
    background: #000;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    gap: 1.5rem;
}
.intro-video { width: 80vw; max-width: 960px; max-height: 70vh; border-radius: var(--radius-lg); object-fit: cover; }
.intro-controls { width: 80vw; max-width: 960px; display: flex; align-items: center; gap: 1rem; }
.intro-progress { flex: 1; height: 4px; border-radius: 2px; background: var(--card-border); overflow: hidden; }
.intro-progress-bar { height: 100%; background: var(--primary); transition: width .1s linear; }

/* Hero */
.hero { padding: 5rem 0; }
.hero-grid { display: grid; grid-template-columns: repeat(2, minmax(0, 1fr)); gap: 3rem; align-items: center; }
.hero h1 { font-size: 3rem; font-weight: 600; line-height: 1.15; letter-spacing: -0.02em; margin: 0; }
.hero-pitch { margin-top: 1rem; color: var(--text-secondary); font-size: 1.125rem; line-height: 1.6; }
.hero-cta-group { margin-top: 1.5rem; display: flex; flex-wrap: wrap; gap: .75rem; }
.hero-stats { margin-top: 2.5rem; }
.hero-video-frame {
    aspect-ratio: 16 / 9;
    padding: .5rem;
    border-radius: var(--radius-xl);
    background: var(--primary);
    box-shadow: var(--shadow-glow);
}
.hero-video { width: 100%; height: 100%; border-radius: calc(var(--radius-xl) - 8px); object-fit: cover; }
.hero-pills { margin-top: 1rem; gap: .75rem; text-align: center; }
.pill {
    display: inline-flex;
    justify-content: center;
    border-radius: 999px;
    padding: .25rem .75rem;
    font-size: .75rem;
    color: var(--text-secondary);
    background: var(--card-dark);
    border: 1px solid var(--card-border);
    box-shadow: var(--shadow-dark);
}

/* Sections and cards */
.page-section { padding: 4rem 0; scroll-margin-top: 5rem; }
.section-heading { max-width: 48rem; }
.section-heading h2 { font-size: 1.875rem; font-weight: 600; margin: 0; }
.section-subtitle { margin-top: .5rem; color: var(--text-secondary); font-size: 1.125rem; }
.section-body { margin-top: 2rem; }
.prose { color: var(--text-secondary); line-height: 1.7; max-width: 65ch; }
.prose h4 { color: var(--text-primary); }
.founders { margin-top: 2rem; }
.card {
    border-radius: var(--radius-xl);
    border: 1px solid var(--card-border);
    background: var(--card-dark);
    padding: 1.25rem;
    box-shadow: var(--shadow-dark);
}
.card-hover { transition: transform .2s ease, box-shadow .2s ease; }
.card-hover:hover { transform: translateY(-2px); box-shadow: var(--shadow-glow); }
.card-title { font-weight: 500; color: var(--text-primary); margin: 0 0 .5rem; }
.card-text { font-size: .875rem; color: var(--text-secondary); }
.card-list { margin: .75rem 0 0; padding-left: 1.25rem; font-size: .875rem; color: var(--text-secondary); display: grid; gap: .5rem; }
.card-eyebrow { font-size: .75rem; text-transform: uppercase; letter-spacing: .05em; color: var(--text-muted); }
.steps { list-style: none; padding: 0; margin: 0; }
.stat { text-align: center; padding: 1rem; }
.stat-value { font-size: 1.125rem; font-weight: 600; }
.stat-label { margin-top: .25rem; font-size: .75rem; text-transform: uppercase; letter-spacing: .05em; color: var(--text-muted); }
.founder { display: flex; align-items: center; gap: 1rem; }
.founder-avatar {
    flex-shrink: 0;
    width: 3rem;
    height: 3rem;
    border-radius: 999px;
    background: var(--primary);
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: .875rem;
    font-weight: 500;
}
.placeholder-block {
    display: grid;
    place-items: center;
    border-radius: var(--radius-md);
    background: var(--card-border);
    color: var(--text-muted);
    font-size: .875rem;
}
.placeholder-wide { aspect-ratio: 16 / 10; }
.placeholder-phone { aspect-ratio: 4 / 7; transition: transform .2s ease; }
.placeholder-phone:hover { transform: translateY(-4px); }
.market-stats { margin-top: 1.5rem; gap: 1rem; }
.media-placeholder {
    display: grid;
    place-items: center;
    min-height: 8rem;
    background: var(--card-border);
    color: var(--text-muted);
    font-size: .875rem;
}

/* Diagram + lightbox */
.diagram-card { margin-top: 2rem; border-radius: var(--radius-xl); border: 1px solid var(--card-border); background: var(--card-dark); padding: 1rem; box-shadow: var(--shadow-dark); }
.diagram-thumb { position: relative; aspect-ratio: 16 / 9; overflow: hidden; border-radius: 8px; cursor: pointer; }
.diagram-image { width: 100%; height: 100%; object-fit: contain; transition: transform .3s ease; }
.diagram-thumb:hover .diagram-image { transform: scale(1.05); }
.diagram-hover { position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; transition: background .3s ease; }
.diagram-thumb:hover .diagram-hover { background: rgba(0, 0, 0, .1); }
.diagram-hover-icon { opacity: 0; padding: .75rem; border-radius: 999px; background: rgba(255, 255, 255, .9); color: #334155; transition: opacity .3s ease; }
.diagram-thumb:hover .diagram-hover-icon { opacity: 1; }
.diagram-caption { text-align: center; font-size: .875rem; color: var(--text-muted); margin-top: .75rem; }
.image-modal {
    position: fixed;
    inset: 0;
    z-index: 80;
    background: rgba(0, 0, 0, 0.9);
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 1rem;
}
.image-modal-frame { position: relative; }
.image-modal-content { max-width: 95vw; max-height: 95vh; object-fit: contain; border-radius: 12px; box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5); }
.image-modal-close {
    position: absolute;
    top: 1rem;
    right: 1rem;
    padding: .5rem;
    border: none;
    border-radius: 999px;
    background: rgba(0, 0, 0, .5);
    color: #fff;
    cursor: pointer;
}
.image-modal-close:hover { background: rgba(0, 0, 0, .7); }

/* Demo */
.demo-video-frame { aspect-ratio: 16 / 9; overflow: hidden; border-radius: var(--radius-xl); border: 1px solid var(--card-border); box-shadow: var(--shadow-dark); }
.demo-video { width: 100%; height: 100%; object-fit: cover; }
.screenshots { gap: 1rem; }
.demo-links { margin-top: 1.5rem; font-size: .875rem; color: var(--text-secondary); }
.demo-links a { color: var(--secondary); }

/* Forms */
.form-grid { display: grid; grid-template-columns: repeat(2, minmax(0, 1fr)); gap: 1rem; max-width: 48rem; }
.form-wide { grid-column: span 2; }
.form-input {
    width: 100%;
    box-sizing: border-box;
    min-height: 44px;
    padding: .75rem 1rem;
    font-size: 16px;
    border-radius: 12px;
    border: 1px solid var(--card-border);
    background: var(--card-dark);
    color: var(--text-primary);
    -webkit-appearance: none;
}
.form-input::placeholder { color: var(--text-muted); }
.form-input:focus { outline: none; border-color: var(--primary); box-shadow: 0 0 0 2px var(--primary); }
.form-tall { min-height: 130px; }
.form-consent { display: flex; align-items: flex-start; gap: .5rem; font-size: .875rem; color: var(--text-secondary); }
.form-consent input { margin-top: .25rem; accent-color: var(--primary); }
.confirmation { max-width: 42rem; padding: 1.5rem; border-radius: var(--radius-xl); box-shadow: var(--shadow-dark); }
.confirmation-success { background: rgba(16, 185, 129, .12); border: 1px solid var(--success); }
.confirmation-info { background: rgba(6, 182, 212, .12); border: 1px solid var(--secondary); }
.confirmation-title { font-weight: 500; margin: 0; }
.confirmation-body { margin: .25rem 0 0; font-size: .875rem; color: var(--text-secondary); }
.contact-details { margin-top: 2rem; font-size: .875rem; color: var(--text-secondary); }
.contact-details a { color: var(--secondary); }

/* Footer */
.site-footer { margin-top: 5rem; border-top: 1px solid var(--card-border); background: rgba(26, 26, 46, .6); }
.footer-row { display: flex; align-items: center; justify-content: space-between; gap: 1rem; padding-top: 2.5rem; padding-bottom: 2.5rem; font-size: .875rem; color: var(--text-secondary); }
.footer-brand { display: flex; align-items: center; gap: .75rem; }
.footer-logo { height: 1.5rem; width: auto; border-radius: 4px; }
.footer-links { display: flex; gap: 1.5rem; }
.footer-links a { text-decoration: none; }
.footer-links a:hover { color: var(--text-primary); }

@media (max-width: 1024px) {
    .grid-4 { grid-template-columns: repeat(2, minmax(0, 1fr)); }
    .hero-grid { grid-template-columns: 1fr; }
    .hero-media { order: -1; }
}

@media (max-width: 768px) {
    .nav-desktop { display: none; }
    .burger-menu { display: inline-flex; }
    .grid-2, .grid-3, .grid-4, .form-grid { grid-template-columns: 1fr; }
    .form-wide { grid-column: auto; }
    .footer-row { flex-direction: column; align-items: flex-start; }
}

@media (max-width: 640px) {
    .container, .header-content { padding: 0 1rem; }
    .hero { padding: 3rem 0; text-align: center; }
    .hero h1 { font-size: 2rem; line-height: 1.2; }
    .section-heading h2 { font-size: 1.75rem; line-height: 1.3; }
    .hero-cta-group { justify-content: center; }
    .btn { width: 100%; max-width: 300px; padding: .875rem 1.5rem; }
    .header-cta { width: auto; }
    .nav-logo { font-size: 1.1rem; max-width: 60%; }
    .intro-video, .intro-controls { width: 95vw; }
    .intro-video { min-height: 250px; max-height: 65vh; }
}
"#;
