use yew::prelude::*;

#[function_component(Cta)]
pub fn cta() -> Html {
    html! {
        <section id="contact" class="cta-section">
            <style>{CTA_CSS}</style>
            <h2>{"Ready to put your money on a plan?"}</h2>
            <p>{"A 30 minute call, no obligation. We'll look at where you are and sketch where your portfolio should be."}</p>
            <a class="cta-button" href="mailto:hello@smartassetallocator.com?subject=Consultation">
                {"Talk to an advisor"}
            </a>
        </section>
    }
}

const CTA_CSS: &str = r#"
    .cta-section {
        padding: 5rem 2rem;
        text-align: center;
        background: linear-gradient(135deg, #1e3a8a 0%, #2563eb 100%);
        color: #fff;
    }
    .cta-section h2 {
        font-size: 2.25rem;
        margin-bottom: 1rem;
    }
    .cta-section p {
        max-width: 600px;
        margin: 0 auto 2rem;
        color: #dbeafe;
        font-size: 1.1rem;
    }
    .cta-button {
        display: inline-block;
        padding: 0.9rem 2rem;
        background: #fff;
        color: #1e3a8a;
        border-radius: 8px;
        font-weight: 600;
        text-decoration: none;
    }
"#;
