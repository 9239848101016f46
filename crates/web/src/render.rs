//! Result card markup.

use std::time::Duration;

use showroom_core::{ListingId, Nok, ValueObject};
use showroom_inventory::CarListing;

/// One rendered result card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: ListingId,
    /// Inner markup of the `.car-card` element.
    pub html: String,
    /// When the card should get its `reveal` class, counted from rendering.
    pub reveal_after: Duration,
}

/// Escape text for use in element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn format_price(price: Option<Nok>) -> String {
    Nok::display_or_dash(price.as_ref())
}

/// Cards for `listings`, in the order given. Card `i` is revealed after
/// `i * reveal_step`.
pub fn render_cards<'a>(listings: impl IntoIterator<Item = &'a CarListing>, reveal_step: Duration) -> Vec<Card> {
    listings
        .into_iter()
        .enumerate()
        .map(|(index, listing)| render_card(listing, index, reveal_step))
        .collect()
}

pub fn render_card(listing: &CarListing, index: usize, reveal_step: Duration) -> Card {
    let badge = listing
        .badge
        .as_deref()
        .filter(|badge| !badge.is_empty())
        .map(|badge| format!(r#"<div class="badge">{}</div>"#, escape_html(badge)))
        .unwrap_or_default();

    let html = format!(
        r##"<div class="car-card__panel">
  <div style="position:relative;">
    {badge}
    <div class="car-image-wrap">
      <img src="{image}" alt="{alt}" loading="lazy" />
    </div>
  </div>
  <div class="card-body">
    <div class="card-title">{title}</div>
    <div class="card-sub">{trim}</div>
    <div class="card-price">{price}</div>
  </div>
  <div class="card-actions">
    <button class="btn btn-gold" data-id="{id}" data-action="view">View</button>
    <a class="btn btn-ghost" href="#contact">Enquire</a>
  </div>
</div>"##,
        image = escape_html(listing.image_or_placeholder()),
        alt = escape_html(&format!("{} {}", listing.make, listing.model)),
        title = escape_html(&listing.title()),
        trim = escape_html(listing.trim_or_empty()),
        price = escape_html(&format_price(listing.price)),
        id = escape_html(listing.id.as_str()),
    );

    Card {
        id: listing.id.clone(),
        html,
        reveal_after: reveal_step.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX)),
    }
}

#[cfg(test)]
mod tests {
    use showroom_inventory::PLACEHOLDER_IMAGE;

    use super::*;

    const STEP: Duration = Duration::from_millis(90);

    fn listing(id: &str, make: &str, model: &str) -> CarListing {
        let mut listing = CarListing::new(id.parse().unwrap(), make, model);
        listing.year = Some(2020);
        listing.price = Some(Nok(199_000));
        listing
    }

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(escape_html(r#"<b>"A&B's"</b>"#), "&lt;b&gt;&quot;A&amp;B&#39;s&quot;&lt;/b&gt;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn script_in_make_is_not_executable() {
        let card = render_card(&listing("1", "<script>alert(1)</script>", "X"), 0, STEP);
        assert!(!card.html.contains("<script>"));
        assert!(card.html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn one_card_per_listing_in_order_with_staggered_reveal() {
        let items = [listing("a", "Audi", "A4"), listing("b", "BMW", "i4"), listing("c", "Volvo", "V90")];
        let cards = render_cards(&items, STEP);

        let ids: Vec<_> = cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        let delays: Vec<_> = cards.iter().map(|c| c.reveal_after.as_millis()).collect();
        assert_eq!(delays, vec![0, 90, 180]);
    }

    #[test]
    fn empty_subset_renders_no_cards() {
        assert!(render_cards(&Vec::<CarListing>::new(), STEP).is_empty());
    }

    #[test]
    fn card_shows_heading_price_and_view_action() {
        let mut item = listing("car-9", "Audi", "A4");
        item.trim = Some("Avant".into());
        let card = render_card(&item, 0, STEP);

        assert!(card.html.contains(r#"<div class="card-title">2020 Audi A4</div>"#));
        assert!(card.html.contains(r#"<div class="card-sub">Avant</div>"#));
        assert!(card.html.contains("199\u{a0}000\u{a0}kr"));
        assert!(card.html.contains(r#"data-id="car-9" data-action="view""#));
        assert!(card.html.contains(r##"href="#contact">Enquire</a>"##));
    }

    #[test]
    fn missing_image_renders_placeholder() {
        let card = render_card(&listing("a", "Audi", "A4"), 0, STEP);
        assert!(card.html.contains(&escape_html(PLACEHOLDER_IMAGE)));
    }

    #[test]
    fn badge_is_optional() {
        let mut item = listing("a", "Audi", "A4");
        assert!(!render_card(&item, 0, STEP).html.contains("class=\"badge\""));
        item.badge = Some("Sold & gone".into());
        assert!(render_card(&item, 0, STEP).html.contains(r#"<div class="badge">Sold &amp; gone</div>"#));
    }

    #[test]
    fn missing_price_renders_dash() {
        let mut item = listing("a", "Audi", "A4");
        item.price = None;
        assert!(render_card(&item, 0, STEP).html.contains(r#"<div class="card-price">—</div>"#));
    }

    proptest::proptest! {
        #[test]
        fn escaped_text_has_no_markup_characters(text in "\\PC*") {
            let escaped = escape_html(&text);
            proptest::prop_assert!(!escaped.contains(['<', '>', '"', '\'']));
            let restored = escaped
                .replace("&lt;", "<")
                .replace("&gt;", ">")
                .replace("&quot;", "\"")
                .replace("&#39;", "'")
                .replace("&amp;", "&");
            proptest::prop_assert_eq!(restored, text);
        }
    }
}
