use yew::prelude::*;

/// Sets the document title to "`title` · Coworking". Each page sets its own,
/// so nothing is restored on unmount.
#[hook]
pub fn use_title(title: &str) {
    let title = format!("{title} · Coworking");
    use_effect_with(title, |title| {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            doc.set_title(title);
        }
    });
}
