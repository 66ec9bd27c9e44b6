#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Ensures the CSS classes the shared components emit stay present in the unified
theme (`ui/assets/theme/main.css`) and the header stylesheet. A substring check
is enough to catch a rename that would otherwise only show up as broken styling
in a packaged build.

If you rename or remove a selector, update the component markup and the lists
below together.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

/// Selectors / tokens that must exist in the shared theme.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".site {",
    ".site--dark",
    ".site__main",
    // Buttons & shared UI
    ".button {",
    ".button--primary",
    ".button--ghost",
    ".section-title",
    // Sections
    ".hero__title",
    ".courses__feature",
    ".courses__badge",
    ".teacher-card",
    ".teacher-card__skill",
    ".gallery__grid",
    ".lightbox",
    ".about__heading",
    ".contact__social-link--telegram",
    // Forms
    ".form__input",
    ".form__status",
    ".form__status--error",
    ".register__benefits",
    // Language modal & footer
    ".language-modal",
    ".language-modal__option--active",
    ".site-footer",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 860px)",
];

const REQUIRED_NAVBAR_SELECTORS: &[&str] = &[
    ".navbar {",
    ".navbar__links",
    ".navbar__button",
    ".navbar__menu-toggle",
    ".navbar__mobile",
];

fn missing_from(css: &str, selectors: &[&'static str]) -> Vec<&'static str> {
    selectors
        .iter()
        .copied()
        .filter(|sel| !css.contains(sel))
        .collect()
}

#[test]
fn unified_theme_contains_required_selectors() {
    let missing = missing_from(THEME_CSS, REQUIRED_SELECTORS);
    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn navbar_stylesheet_contains_required_selectors() {
    let missing = missing_from(NAVBAR_CSS, REQUIRED_NAVBAR_SELECTORS);
    assert!(missing.is_empty(), "navbar.css missing: {missing:?}");
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn social_buttons_are_all_styled() {
    for network in ["youtube", "instagram", "telegram", "facebook"] {
        let selector = format!(".contact__social-link--{network}");
        assert!(THEME_CSS.contains(&selector), "missing {selector}");
    }
}
