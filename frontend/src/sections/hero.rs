use yew::prelude::*;

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    html! {
        <header class="hero">
            <style>{HERO_CSS}</style>
            <div class="hero-content">
                <h1 class="hero-title">{"Invest with a plan, not a hunch"}</h1>
                <p class="hero-subtitle">
                    {"Smart Asset Allocator builds diversified portfolios around your goals, "}
                    {"keeps them balanced, and explains every move in plain language."}
                </p>
                <div class="hero-cta-group">
                    <a href="#contact" class="hero-cta">{"Book a free consultation"}</a>
                    <a href="#reviews" class="hero-secondary">{"Hear from our clients"}</a>
                </div>
            </div>
        </header>
    }
}

const HERO_CSS: &str = r#"
    .hero {
        min-height: 80vh;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 6rem 2rem 4rem;
        background: linear-gradient(135deg, #0f172a 0%, #1e3a8a 100%);
        color: #fff;
        text-align: center;
    }
    .hero-content {
        max-width: 800px;
    }
    .hero-title {
        font-size: 3.25rem;
        font-weight: 800;
        margin-bottom: 1.5rem;
        line-height: 1.15;
    }
    .hero-subtitle {
        font-size: 1.3rem;
        color: #cbd5e1;
        line-height: 1.7;
        margin-bottom: 2.5rem;
    }
    .hero-cta-group {
        display: flex;
        gap: 1rem;
        justify-content: center;
        flex-wrap: wrap;
    }
    .hero-cta {
        padding: 0.9rem 2rem;
        background: #3b82f6;
        color: #fff;
        border-radius: 8px;
        text-decoration: none;
        font-weight: 600;
        transition: background 0.2s ease;
    }
    .hero-cta:hover {
        background: #2563eb;
    }
    .hero-secondary {
        padding: 0.9rem 2rem;
        border: 1px solid rgba(255, 255, 255, 0.4);
        color: #fff;
        border-radius: 8px;
        text-decoration: none;
    }
    @media (max-width: 768px) {
        .hero-title {
            font-size: 2.25rem;
        }
        .hero-subtitle {
            font-size: 1.1rem;
        }
    }
"#;
