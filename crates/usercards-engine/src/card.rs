use usercards_types::UserRecord;

use crate::view::{Action, Element, EventKind, Key, Node, Presentation, Tag};

/// Build the card for one profile.
///
/// Layout: lazily loaded image, a decorative blurred layer derived from the
/// same picture, then a content block with the name as heading and the bio
/// as paragraph. The card is a focusable list item; Enter activates it like
/// a click, and a click presents the profile.
pub fn render_card(user: &UserRecord) -> Node {
    let image = Element::new(Tag::Img)
        .class("bg-img")
        .attr("src", &user.picture_url)
        .attr("alt", &user.name)
        .attr("loading", "lazy");

    let blurred_layer = Element::new(Tag::Div)
        .class("blurred-layer")
        .attr("aria-hidden", "true")
        .attr(
            "style",
            format!("background-image: url({})", user.picture_url),
        );

    let content = Element::new(Tag::Div)
        .class("content")
        .child(Element::new(Tag::H3).text(&user.name))
        .child(Element::new(Tag::P).text(user.bio_text()));

    Element::new(Tag::Div)
        .class("card")
        .attr("role", "listitem")
        .attr("tabindex", "0")
        .child(image)
        .child(blurred_layer)
        .child(content)
        .on(EventKind::KeyDown { key: Key::Enter }, Action::Activate)
        .on(EventKind::Click, Action::Present(Presentation::of(user)))
        .into()
}
