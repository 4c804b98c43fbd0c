//! Card for one concert in the journal list.

use leptos::prelude::*;

use crate::net::types::BandEvent;

/// Rating rendered as filled and empty stars, clamped to `0..=5`.
#[must_use]
pub fn rating_stars(rating: i32) -> String {
    let filled = usize::try_from(rating.clamp(0, 5)).unwrap_or_default();
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

#[component]
pub fn EventCard(event: BandEvent) -> impl IntoView {
    let stars = rating_stars(event.rating);
    let comment = event.comment.filter(|c| !c.trim().is_empty());
    let datetime = event.date.clone();

    view! {
        <li class="event-card">
            <span class="event-card__band">{event.band_name}</span>
            <span class="event-card__place">{event.place}</span>
            <time class="event-card__date" datetime=datetime>{event.date}</time>
            <span class="event-card__rating" title=format!("{} / 5", event.rating)>{stars}</span>
            {comment.map(|c| view! { <p class="event-card__comment">{c}</p> })}
        </li>
    }
}
