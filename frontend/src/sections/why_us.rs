use yew::prelude::*;

const REASONS: &[(&str, &str, &str)] = &[
    ("fas fa-scale-balanced", "Fiduciary by default", "We are legally bound to act in your interest. No commissions, no house products."),
    ("fas fa-chart-pie", "Evidence-based portfolios", "Low-cost, globally diversified funds chosen on decades of data rather than forecasts."),
    ("fas fa-rotate", "Disciplined rebalancing", "Threshold-based rebalancing keeps your risk where you set it, in every market."),
    ("fas fa-user-tie", "A named advisor", "One person who knows your situation, reachable by phone or email within a business day."),
];

#[function_component(WhyUs)]
pub fn why_us() -> Html {
    html! {
        <section class="why-us">
            <style>{WHY_US_CSS}</style>
            <h2>{"Why clients choose us"}</h2>
            <div class="why-us-grid">
                { for REASONS.iter().map(|(icon, title, text)| html! {
                    <div class="why-us-item">
                        <i class={*icon}></i>
                        <h3>{*title}</h3>
                        <p>{*text}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

const WHY_US_CSS: &str = r#"
    .why-us {
        padding: 5rem 2rem;
        max-width: 1200px;
        margin: 0 auto;
        text-align: center;
    }
    .why-us h2 {
        font-size: 2.25rem;
        margin-bottom: 3rem;
        color: #1f2937;
    }
    .why-us-grid {
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 2rem;
    }
    .why-us-item i {
        font-size: 2rem;
        color: #2563eb;
        margin-bottom: 1rem;
    }
    .why-us-item h3 {
        font-size: 1.2rem;
        margin-bottom: 0.75rem;
        color: #111827;
    }
    .why-us-item p {
        color: #4b5563;
        line-height: 1.6;
    }
    @media (max-width: 1024px) {
        .why-us-grid {
            grid-template-columns: repeat(2, 1fr);
        }
    }
    @media (max-width: 640px) {
        .why-us-grid {
            grid-template-columns: 1fr;
        }
    }
"#;
