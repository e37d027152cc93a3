//! Page sections around the showcase.
//!
//! Each section is a plain function from catalog slices (and, where needed,
//! site settings) to [`Markup`]. Sections that animate take an
//! [`AnimationPort`] and register their entrances while rendering, so the
//! ids they register always exist in the markup they return.
//!
//! Page order:
//!
//! ```text
//! navbar → hero → counters → showcase (#work) → logo strip → feature cards
//!        → experience (#experience) → tech stack (#skills)
//!        → testimonials (#testimonials) → footer
//! ```

use crate::animation::{AnimState, AnimationPort, ElementId, Registration, Timing, card_entrance};
use crate::config::{AnimationConfig, SiteInfo};
use crate::content::{
    Ability, CounterItem, ExperienceCard, ExperienceLogo, LogoIcon, NavLink, SocialImage,
    TechStackIcon, TechStackImage, Testimonial, Word,
};
use maud::{Markup, html};

/// The sequence followed by itself.
///
/// Marquee-style rows (hero words, logo strip) scroll by exactly one copy of
/// their content, so the second copy fills the gap and the loop is seamless.
pub fn looped<T>(items: &[T]) -> impl Iterator<Item = &T> {
    items.iter().chain(items.iter())
}

fn non_empty(s: &str) -> Option<&str> {
    (!s.is_empty()).then_some(s)
}

pub fn navbar(links: &[NavLink], site: &SiteInfo) -> Markup {
    html! {
        header.navbar {
            div.inner {
                a.logo href="#hero" { (site.owner) }
                nav.desktop {
                    ul {
                        @for link in links {
                            li.group {
                                a href=(link.link) {
                                    span { (link.name) }
                                    span.underline {}
                                }
                            }
                        }
                    }
                }
                a.contact-btn href=(site.contact_href) {
                    div.inner { span { "Contact me" } }
                }
            }
        }
    }
}

const HERO_HEADLINE_ID: &str = "hero-headline";

pub fn hero(
    words: &[Word],
    site: &SiteInfo,
    port: &mut dyn AnimationPort,
    motion: &AnimationConfig,
) -> Markup {
    port.register(Registration::new(
        ElementId::new(HERO_HEADLINE_ID),
        AnimState::opacity(0.0).with_y(motion.card_offset),
        AnimState::opacity(1.0).with_y(0.0),
        Timing::new(motion.card_duration),
    ));

    html! {
        section.hero id="hero" {
            div.hero-layout {
                header.hero-text id=(HERO_HEADLINE_ID) {
                    h1 {
                        "Shaping"
                        span.slide {
                            span.wrapper {
                                @for word in looped(words) {
                                    span.word {
                                        img src=[non_empty(&word.img_path)] alt=(word.text);
                                        span { (word.text) }
                                    }
                                }
                            }
                        }
                    }
                    h1 { "into Real Projects" }
                    h1 { "that Deliver Results" }
                    p.text-muted { (site.tagline) }
                }
            }
        }
    }
}

pub fn counters(
    items: &[CounterItem],
    port: &mut dyn AnimationPort,
    motion: &AnimationConfig,
) -> Markup {
    let ids: Vec<String> = (0..items.len()).map(|i| format!("counter-{i}")).collect();
    for (index, id) in ids.iter().enumerate() {
        port.register(card_entrance(ElementId::new(id.as_str()), index, motion));
    }

    html! {
        div.counter-section id="counter" {
            div.counter-grid {
                @for (item, id) in items.iter().zip(&ids) {
                    div.counter-card id=(id) {
                        div.counter-number data-count=(item.value) data-suffix=(item.suffix) {
                            (item.value) (item.suffix)
                        }
                        div.counter-label { (item.label) }
                    }
                }
            }
        }
    }
}

pub fn logo_strip(logos: &[LogoIcon]) -> Markup {
    html! {
        div.logo-strip {
            div.marquee {
                div.marquee-box {
                    @for logo in looped(logos) {
                        div.marquee-item {
                            img src=[non_empty(&logo.img_path)] alt="";
                        }
                    }
                }
            }
        }
    }
}

pub fn feature_cards(abilities: &[Ability]) -> Markup {
    html! {
        div.feature-cards {
            @for ability in abilities {
                div.card-border {
                    div.ability-icon {
                        img src=[non_empty(&ability.img_path)] alt=(ability.title);
                    }
                    h3 { (ability.title) }
                    p.text-muted { (ability.desc) }
                }
            }
        }
    }
}

pub fn experience(
    cards: &[ExperienceCard],
    logos: &[ExperienceLogo],
    port: &mut dyn AnimationPort,
    motion: &AnimationConfig,
) -> Markup {
    let ids: Vec<String> = (0..cards.len())
        .map(|i| format!("experience-card-{i}"))
        .collect();
    for (index, id) in ids.iter().enumerate() {
        port.register(card_entrance(ElementId::new(id.as_str()), index, motion));
    }

    html! {
        section.section-padding id="experience" {
            h2.section-title { "Professional Work Experience" }
            div.timeline {
                @for (card, id) in cards.iter().zip(&ids) {
                    div.exp-card id=(id) {
                        blockquote.text-muted { "\u{201c}" (card.review) "\u{201d}" }
                        div.exp-body {
                            div.exp-logo {
                                img src=[non_empty(&card.logo_path)] alt=(card.title);
                            }
                            div {
                                h3 { (card.title) }
                                p.date { (card.date) }
                                p.text-muted { "Responsibilities" }
                                ul {
                                    @for item in &card.responsibilities {
                                        li { (item) }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            @if !logos.is_empty() {
                div.exp-logos {
                    @for logo in logos {
                        img src=[non_empty(&logo.img_path)] alt=(logo.name);
                    }
                }
            }
        }
    }
}

/// Skills section with one 3D model slot per icon.
///
/// The slot carries the model path, scale and rotation as data attributes for
/// the page's model viewer. A flat image with the same name, when the catalog
/// has one, is rendered inside the slot as the poster shown before the model
/// loads.
pub fn tech_stack(icons: &[TechStackIcon], images: &[TechStackImage]) -> Markup {
    html! {
        section.section-padding id="skills" {
            h2.section-title { "How I Can Contribute & My Key Skills" }
            div.tech-grid {
                @for icon in icons {
                    @let poster = images.iter().find(|img| img.name == icon.name);
                    div.tech-card {
                        div.model-slot
                            data-model=(icon.model_path)
                            data-scale=(icon.scale.to_string())
                            data-rotation=(rotation_attr(icon.rotation)) {
                            @if let Some(poster) = poster {
                                img.poster src=[non_empty(&poster.img_path)] alt=(poster.name);
                            }
                        }
                        p { (icon.name) }
                    }
                }
            }
        }
    }
}

fn rotation_attr(rotation: [f32; 3]) -> String {
    format!("{} {} {}", rotation[0], rotation[1], rotation[2])
}

pub fn testimonials(
    items: &[Testimonial],
    port: &mut dyn AnimationPort,
    motion: &AnimationConfig,
) -> Markup {
    let ids: Vec<String> = (0..items.len())
        .map(|i| format!("testimonial-{i}"))
        .collect();
    for (index, id) in ids.iter().enumerate() {
        port.register(card_entrance(ElementId::new(id.as_str()), index % 3, motion));
    }

    html! {
        section.section-padding id="testimonials" {
            h2.section-title { "What People Say About Me" }
            div.testimonial-grid {
                @for (item, id) in items.iter().zip(&ids) {
                    div.card-border.testimonial id=(id) {
                        p.text-muted { (item.review) }
                        div.author {
                            img src=[non_empty(&item.img_path)] alt=(item.name);
                            div {
                                p.name { (item.name) }
                                p.text-muted { (item.mentions) }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn footer(socials: &[SocialImage], site: &SiteInfo) -> Markup {
    html! {
        footer.footer {
            div.footer-container {
                div.socials {
                    @for social in socials {
                        @let icon = html! { img src=[non_empty(&social.img_path)] alt=(social.name); };
                        @if let Some(url) = &social.url {
                            a.icon href=(url) target="_blank" rel="noopener" { (icon) }
                        } @else {
                            div.icon { (icon) }
                        }
                    }
                }
                p { "\u{a9} " (site.year) " " (site.owner) ". All rights reserved." }
            }
        }
    }
}
