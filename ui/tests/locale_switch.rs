//! Runtime language switching. Kept in its own test binary because the loader
//! is process-wide.

use dioxus::prelude::*;
use ui::components::{nav_label, Navbar, SearchBar};
use ui::core::NavTarget;

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn navbar() -> Element {
    rsx! { Navbar {} }
}

fn search_bar() -> Element {
    rsx! { SearchBar {} }
}

#[test]
fn switching_language_relabels_components() {
    ui::i18n::init();

    ui::i18n::set_language("es-ES").expect("es-ES bundle loads");
    assert_eq!(ui::i18n::current_language(), "es-ES");
    assert_eq!(nav_label(NavTarget::Home), "inicio");
    let html = render(navbar);
    assert!(html.contains(">Registrarse</button>"), "{html}");
    assert!(html.contains("href=\"/about\">nosotros</a>"), "{html}");

    ui::i18n::set_language("fr-FR").expect("fr-FR bundle loads");
    let html = render(search_bar);
    assert!(html.contains(">choisir le lieu</h6>"), "{html}");
    assert!(html.contains(">retour</span>"), "{html}");

    // Unknown-but-valid tags fall back to en-US.
    ui::i18n::set_language("zz-ZZ").expect("fallback selection succeeds");
    assert_eq!(nav_label(NavTarget::Destination), "destination");

    // Unparsable tags leave the current language alone.
    ui::i18n::set_language("es-ES").expect("es-ES bundle loads");
    ui::i18n::set_language("%%").expect("unparsable tags are ignored");
    assert_eq!(nav_label(NavTarget::Seat), "asiento");
}
