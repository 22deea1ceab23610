use leptos::prelude::*;

use super::super::resolve::use_center;
use crate::shared::clock::LiveClock;

#[component]
pub fn CenterHomePage() -> impl IntoView {
    let center = use_center();

    move || {
        let Some(center) = center.get() else {
            return view! { <p class="loading-text">"Loading center details..."</p> }.into_any();
        };

        let address = center.address.clone().unwrap_or_default();
        let contact = center.contact.clone().unwrap_or_default();
        let place = [address.city, address.district, address.province]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(", ");

        view! {
            <main class="health-main">
                <div class="header-section">
                    <h2>
                        "Welcome, " <span class="highlight-text">{center.name.clone()}</span>
                    </h2>
                    <LiveClock />
                </div>
                <p>"Manage your center's bookings, lab reports, and information here."</p>

                <div class="center-info-card">
                    <div class="info-line">{place}</div>
                    <div class="info-line">
                        {contact.phone.unwrap_or_else(|| "N/A".to_string())}
                    </div>
                    <div class="info-line">
                        {contact.email.unwrap_or_else(|| "N/A".to_string())}
                    </div>
                </div>

                <div class="health-center-cards">
                    <a href=format!("/healthcenter/{}/bookings", center.id) class="health-card">
                        <h3>"View Bookings & Lab Reports"</h3>
                        <p>"Manage all your ongoing and completed bookings."</p>
                    </a>
                    <a href=format!("/healthcenter/{}/details", center.id) class="health-card">
                        <h3>"Center Details"</h3>
                        <p>"Update and maintain your health center's information."</p>
                    </a>
                    <a href=format!("/healthcenter/{}/tests", center.id) class="health-card">
                        <h3>"Manage Tests"</h3>
                        <p>"View, edit and remove tests offered by your center."</p>
                    </a>
                </div>
            </main>
        }
        .into_any()
    }
}
