use yew::prelude::*;

struct CorporateService {
    title: &'static str,
    summary: &'static str,
    points: &'static [&'static str],
}

const CORPORATE_SERVICES: &[CorporateService] = &[
    CorporateService {
        title: "Treasury management",
        summary: "Put idle reserves to work without giving up liquidity.",
        points: &["Laddered short-term bonds", "Cash sweep optimisation", "Monthly liquidity reports"],
    },
    CorporateService {
        title: "Retirement plan design",
        summary: "Plans your employees understand and actually use.",
        points: &["Low-cost default funds", "Auto-enrolment setup", "Annual fee benchmarking"],
    },
    CorporateService {
        title: "Financial wellness",
        summary: "Workshops and one-to-one sessions for your team.",
        points: &["Budgeting and debt", "Equity compensation", "Retirement readiness"],
    },
];

#[function_component(OurCorporateServices)]
pub fn our_corporate_services() -> Html {
    html! {
        <section class="corporate-services">
            <style>{CORPORATE_CSS}</style>
            <div class="corporate-content">
                <h2>{"For businesses"}</h2>
                <p class="corporate-intro">
                    {"The same discipline we bring to family portfolios, applied to company balance sheets and benefit plans."}
                </p>
                <div class="corporate-grid">
                    { for CORPORATE_SERVICES.iter().map(|service| html! {
                        <div class="corporate-card">
                            <h3>{service.title}</h3>
                            <p>{service.summary}</p>
                            <ul>
                                { for service.points.iter().map(|point| html! { <li>{*point}</li> }) }
                            </ul>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

const CORPORATE_CSS: &str = r#"
    .corporate-services {
        padding: 5rem 2rem;
        background: #0f172a;
        color: #e2e8f0;
    }
    .corporate-content {
        max-width: 1200px;
        margin: 0 auto;
    }
    .corporate-content h2 {
        font-size: 2.25rem;
        text-align: center;
        margin-bottom: 1rem;
        color: #fff;
    }
    .corporate-intro {
        text-align: center;
        max-width: 700px;
        margin: 0 auto 3rem;
        color: #94a3b8;
        font-size: 1.1rem;
    }
    .corporate-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
    }
    .corporate-card {
        background: rgba(255, 255, 255, 0.04);
        border: 1px solid rgba(148, 163, 184, 0.2);
        border-radius: 12px;
        padding: 2rem;
    }
    .corporate-card h3 {
        color: #60a5fa;
        margin-bottom: 0.75rem;
    }
    .corporate-card ul {
        padding-left: 1.25rem;
        color: #cbd5e1;
        line-height: 1.8;
    }
    @media (max-width: 900px) {
        .corporate-grid {
            grid-template-columns: 1fr;
        }
    }
"#;
