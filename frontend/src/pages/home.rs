use yew::prelude::*;
use crate::reviews::ReviewPanel;
use crate::sections::blogs::Blogs;
use crate::sections::corporate_services::OurCorporateServices;
use crate::sections::cta::Cta;
use crate::sections::faq::FaqSection;
use crate::sections::hero::HeroSection;
use crate::sections::services::OurServices;
use crate::sections::why_us::WhyUs;

/// The landing page. Sections are independent; order is the only coupling.
#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="landing-page">
            <head>
                <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css" integrity="sha512-SnH5WK+bZxgPHs44uWIX+LLJAJ9/2PkPKZ5QiAj6Ta86w+fsb2TkcmfRyVX3pBnMFcV7oQPJkl9QevSCWr3W6A==" crossorigin="anonymous" referrerpolicy="no-referrer" />
            </head>
            <HeroSection />
            <WhyUs />
            <OurCorporateServices />
            <FaqSection />
            <OurServices />
            <Blogs />
            <Cta />
            <ReviewPanel />
        </div>
    }
}
