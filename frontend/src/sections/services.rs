use yew::prelude::*;

const SERVICES: &[(&str, &str)] = &[
    ("Portfolio construction", "A target allocation built from your goals, horizon and tolerance for drawdowns."),
    ("Ongoing rebalancing", "Automatic drift monitoring with tax-aware trades when a band is breached."),
    ("Retirement planning", "Withdrawal strategies that stretch savings across decades, not years."),
    ("Tax-loss harvesting", "Realising losses to offset gains while staying fully invested."),
    ("Estate coordination", "Working with your attorney so accounts pass the way you intend."),
    ("Education funding", "Age-based savings plans for children and grandchildren."),
];

#[function_component(OurServices)]
pub fn our_services() -> Html {
    html! {
        <section id="services" class="services-section">
            <style>{SERVICES_CSS}</style>
            <h2>{"Our services"}</h2>
            <div class="services-grid">
                { for SERVICES.iter().enumerate().map(|(i, (title, text))| html! {
                    <div class="service">
                        <span class="service-number">{format!("{:02}", i + 1)}</span>
                        <h3>{*title}</h3>
                        <p>{*text}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

const SERVICES_CSS: &str = r#"
    .services-section {
        padding: 5rem 2rem;
        max-width: 1200px;
        margin: 0 auto;
    }
    .services-section h2 {
        font-size: 2.25rem;
        text-align: center;
        margin-bottom: 3rem;
        color: #1f2937;
    }
    .services-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
    }
    .service {
        padding: 2rem;
        border-radius: 12px;
        border: 1px solid #e5e7eb;
        transition: transform 0.3s ease, box-shadow 0.3s ease;
    }
    .service:hover {
        transform: translateY(-4px);
        box-shadow: 0 8px 24px rgba(37, 99, 235, 0.12);
    }
    .service-number {
        color: #2563eb;
        font-weight: 700;
        font-size: 0.9rem;
    }
    .service h3 {
        margin: 0.5rem 0 0.75rem;
        color: #111827;
    }
    .service p {
        color: #4b5563;
        line-height: 1.6;
    }
    @media (max-width: 1024px) {
        .services-grid {
            grid-template-columns: repeat(2, 1fr);
        }
    }
    @media (max-width: 640px) {
        .services-grid {
            grid-template-columns: 1fr;
        }
    }
"#;
