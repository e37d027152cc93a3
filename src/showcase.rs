//! Work showcase.
//!
//! Renders the "featured + secondary" layout of the project list:
//!
//! ```text
//! div#work.app-showcase
//! ├── featured card   image, title, description     (id == "main")
//! └── project list
//!     ├── slot 0      tinted image, title           (1st non-main project)
//!     └── slot 1      tinted image, title           (2nd non-main project)
//! ```
//!
//! ## Selection
//!
//! The featured project is the first record whose id is `"main"`, wherever it
//! sits in the list. The secondary slots take the first two remaining records
//! in catalog order; any further records are not shown.
//!
//! ## Fallbacks
//!
//! Rendering never fails. Every absent value goes through a named rule:
//!
//! | Value | Rule | Result when absent |
//! |-------|------|--------------------|
//! | image, title, description | [`text_or_empty`] | `""` (no `src` attribute for images) |
//! | alt text | [`alt_or_default`] | [`DEFAULT_ALT`] |
//! | slot tint | [`tint_for`] | [`Slot::default_tint`], different per slot |
//!
//! An empty string counts as absent for alt text and tint.
//!
//! ## Animations
//!
//! [`ShowcaseView::mount`] registers a mount fade on the section (no trigger)
//! and a staggered, scroll-triggered entrance for each of the three cards.
//! The registrations are independent of each other.

use crate::animation::{AnimState, AnimationPort, ElementId, Registration, Timing, card_entrance};
use crate::config::AnimationConfig;
use crate::content::Project;
use maud::{Markup, html};

/// Anchor id of the showcase section.
pub const SECTION_ID: &str = "work";

/// Alt text for images whose project has none.
pub const DEFAULT_ALT: &str = "Project Image";

const FEATURED_CARD_ID: &str = "showcase-featured";

/// One of the two secondary positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    First,
    Second,
}

impl Slot {
    pub const ALL: [Slot; 2] = [Slot::First, Slot::Second];

    pub fn index(self) -> usize {
        match self {
            Slot::First => 0,
            Slot::Second => 1,
        }
    }

    /// Tint used when the slot's project has no `bg_color`.
    pub fn default_tint(self) -> &'static str {
        match self {
            Slot::First => "#FFEFDB",
            Slot::Second => "#FFE7EB",
        }
    }

    fn card_id(self) -> &'static str {
        match self {
            Slot::First => "showcase-slot-0",
            Slot::Second => "showcase-slot-1",
        }
    }
}

// ============================================================================
// Fallback rules
// ============================================================================

/// A text field of a possibly absent project, or `""`.
pub fn text_or_empty<'a>(
    project: Option<&'a Project>,
    field: impl Fn(&'a Project) -> &'a str,
) -> &'a str {
    project.map(field).unwrap_or("")
}

/// The project's alt text, or [`DEFAULT_ALT`] when absent or empty.
pub fn alt_or_default(project: Option<&Project>) -> &str {
    match project {
        Some(p) if !p.alt.is_empty() => p.alt.as_str(),
        _ => DEFAULT_ALT,
    }
}

/// The project's `bg_color`, or the slot's default when absent or empty.
pub fn tint_for(project: Option<&Project>, slot: Slot) -> &str {
    match project.and_then(|p| p.bg_color.as_deref()) {
        Some(color) if !color.is_empty() => color,
        _ => slot.default_tint(),
    }
}

// ============================================================================
// Selection
// ============================================================================

/// Projects picked for the three cards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection<'a> {
    pub featured: Option<&'a Project>,
    pub secondary: [Option<&'a Project>; 2],
}

/// Pick the featured project and the first two secondary projects.
pub fn select(projects: &[Project]) -> Selection<'_> {
    let featured = projects.iter().find(|p| p.is_featured());
    let mut rest = projects.iter().filter(|p| !p.is_featured());
    let secondary = [rest.next(), rest.next()];
    Selection {
        featured,
        secondary,
    }
}

impl<'a> Selection<'a> {
    pub fn slot(&self, slot: Slot) -> Option<&'a Project> {
        self.secondary[slot.index()]
    }

    pub fn featured_card(&self) -> FeaturedCard<'a> {
        let p = self.featured;
        FeaturedCard {
            img_src: text_or_empty(p, |p| p.img_path.as_str()),
            alt: alt_or_default(p),
            title: text_or_empty(p, |p| p.title.as_str()),
            description: text_or_empty(p, |p| p.description.as_str()),
        }
    }

    pub fn secondary_card(&self, slot: Slot) -> SecondaryCard<'a> {
        let p = self.slot(slot);
        SecondaryCard {
            img_src: text_or_empty(p, |p| p.img_path.as_str()),
            alt: alt_or_default(p),
            title: text_or_empty(p, |p| p.title.as_str()),
            tint: tint_for(p, slot),
        }
    }
}

/// Resolved values of the featured card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeaturedCard<'a> {
    pub img_src: &'a str,
    pub alt: &'a str,
    pub title: &'a str,
    pub description: &'a str,
}

/// Resolved values of a secondary card. Secondary cards show no description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecondaryCard<'a> {
    pub img_src: &'a str,
    pub alt: &'a str,
    pub title: &'a str,
    pub tint: &'a str,
}

fn non_empty(s: &str) -> Option<&str> {
    (!s.is_empty()).then_some(s)
}

// ============================================================================
// View
// ============================================================================

/// The showcase section, bound to a project list and animation timings.
pub struct ShowcaseView<'a> {
    projects: &'a [Project],
    motion: &'a AnimationConfig,
}

impl<'a> ShowcaseView<'a> {
    pub fn new(projects: &'a [Project], motion: &'a AnimationConfig) -> Self {
        Self { projects, motion }
    }

    pub fn selection(&self) -> Selection<'a> {
        select(self.projects)
    }

    pub fn render(&self) -> Markup {
        let selection = self.selection();
        let featured = selection.featured_card();

        html! {
            div id=(SECTION_ID) class="app-showcase" {
                div.w-full {
                    div.showcaselayout {
                        div id=(FEATURED_CARD_ID) class="first-project-wrapper" {
                            div.image-wrapper {
                                img src=[non_empty(featured.img_src)] alt=(featured.alt);
                            }
                            div.text-content {
                                h2 { (featured.title) }
                                p.text-muted { (featured.description) }
                            }
                        }
                        div.project-list-wrapper {
                            @for slot in Slot::ALL {
                                (render_secondary(slot, selection.secondary_card(slot)))
                            }
                        }
                    }
                }
            }
        }
    }

    /// Register the section fade and the three card entrances.
    pub fn mount(&self, port: &mut dyn AnimationPort) {
        port.register(Registration::new(
            ElementId::new(SECTION_ID),
            AnimState::opacity(0.0),
            AnimState::opacity(1.0),
            Timing::new(self.motion.section_fade),
        ));

        let cards = [FEATURED_CARD_ID, Slot::First.card_id(), Slot::Second.card_id()];
        for (index, id) in cards.into_iter().enumerate() {
            port.register(card_entrance(ElementId::new(id), index, self.motion));
        }
    }
}

fn render_secondary(slot: Slot, card: SecondaryCard<'_>) -> Markup {
    html! {
        div id=(slot.card_id()) class="project" {
            div.image-wrapper style={ "background-color: " (card.tint) } {
                img src=[non_empty(card.img_src)] alt=(card.alt);
            }
            h2 { (card.title) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{NoopPort, Timeline};
    use crate::test_helpers::{project, secondary, tinted};

    fn view_html(projects: &[Project]) -> String {
        let motion = AnimationConfig::default();
        ShowcaseView::new(projects, &motion).render().into_string()
    }

    fn titles<'a>(selection: &Selection<'a>) -> Vec<Option<&'a str>> {
        selection
            .secondary
            .iter()
            .map(|p| p.map(|p| p.title.as_str()))
            .collect()
    }

    // =========================================================================
    // Selection
    // =========================================================================

    #[test]
    fn featured_found_at_any_position() {
        let lists = [
            vec![project("main", "X"), secondary("s1", "Y"), secondary("s2", "Z")],
            vec![secondary("s1", "Y"), project("main", "X"), secondary("s2", "Z")],
            vec![secondary("s1", "Y"), secondary("s2", "Z"), project("main", "X")],
        ];
        for projects in &lists {
            let selection = select(projects);
            assert_eq!(selection.featured.map(|p| p.title.as_str()), Some("X"));
            assert_eq!(titles(&selection), vec![Some("Y"), Some("Z")]);
        }
    }

    #[test]
    fn secondary_follows_catalog_order() {
        let forward = vec![project("main", "X"), secondary("a", "A"), secondary("b", "B")];
        let reversed = vec![project("main", "X"), secondary("b", "B"), secondary("a", "A")];
        assert_eq!(titles(&select(&forward)), vec![Some("A"), Some("B")]);
        assert_eq!(titles(&select(&reversed)), vec![Some("B"), Some("A")]);
    }

    #[test]
    fn extra_secondary_projects_are_not_selected() {
        let projects = vec![
            secondary("a", "A"),
            secondary("b", "B"),
            secondary("c", "C"),
            project("main", "X"),
        ];
        assert_eq!(titles(&select(&projects)), vec![Some("A"), Some("B")]);
    }

    #[test]
    fn duplicate_main_uses_first_and_skips_the_rest() {
        let projects = vec![project("main", "First"), project("main", "Second"), secondary("s", "S")];
        let selection = select(&projects);
        assert_eq!(selection.featured.unwrap().title, "First");
        assert_eq!(titles(&selection), vec![Some("S"), None]);
    }

    #[test]
    fn empty_catalog_selects_nothing() {
        let selection = select(&[]);
        assert_eq!(selection.featured, None);
        assert_eq!(selection.secondary, [None, None]);
    }

    // =========================================================================
    // Fallback rules
    // =========================================================================

    #[test]
    fn alt_falls_back_when_missing_or_empty() {
        assert_eq!(alt_or_default(None), DEFAULT_ALT);
        assert_eq!(alt_or_default(Some(&project("s", "Y"))), DEFAULT_ALT);
        let mut p = project("s", "Y");
        p.alt = "Screenshot".to_string();
        assert_eq!(alt_or_default(Some(&p)), "Screenshot");
    }

    #[test]
    fn tint_defaults_differ_per_slot() {
        assert_eq!(tint_for(None, Slot::First), "#FFEFDB");
        assert_eq!(tint_for(None, Slot::Second), "#FFE7EB");
        let p = secondary("s", "Y");
        assert_eq!(tint_for(Some(&p), Slot::First), Slot::First.default_tint());
        assert_eq!(tint_for(Some(&p), Slot::Second), Slot::Second.default_tint());
    }

    #[test]
    fn tint_uses_project_color() {
        let p = tinted("s", "Y", "#111");
        assert_eq!(tint_for(Some(&p), Slot::Second), "#111");
    }

    #[test]
    fn empty_tint_counts_as_missing() {
        let p = tinted("s", "Y", "");
        assert_eq!(tint_for(Some(&p), Slot::First), "#FFEFDB");
    }

    #[test]
    fn text_or_empty_on_missing_project() {
        assert_eq!(text_or_empty(None, |p| p.title.as_str()), "");
    }

    // =========================================================================
    // Resolved cards
    // =========================================================================

    #[test]
    fn scenario_main_tinted_and_default_slot() {
        let projects = vec![
            project("main", "X"),
            tinted("s1", "Y", "#111"),
            secondary("s2", "Z"),
        ];
        let selection = select(&projects);
        assert_eq!(selection.featured_card().title, "X");

        let slot0 = selection.secondary_card(Slot::First);
        assert_eq!(slot0.title, "Y");
        assert_eq!(slot0.tint, "#111");

        let slot1 = selection.secondary_card(Slot::Second);
        assert_eq!(slot1.title, "Z");
        assert_eq!(slot1.tint, "#FFE7EB");
    }

    #[test]
    fn scenario_no_main_single_secondary() {
        let projects = vec![secondary("s1", "Y")];
        let selection = select(&projects);

        let featured = selection.featured_card();
        assert_eq!(featured.title, "");
        assert_eq!(featured.description, "");
        assert_eq!(featured.img_src, "");
        assert_eq!(featured.alt, DEFAULT_ALT);

        assert_eq!(selection.secondary_card(Slot::First).title, "Y");
        assert_eq!(
            selection.secondary_card(Slot::Second),
            SecondaryCard {
                img_src: "",
                alt: DEFAULT_ALT,
                title: "",
                tint: "#FFE7EB",
            }
        );
    }

    // =========================================================================
    // Markup
    // =========================================================================

    #[test]
    fn render_exposes_work_anchor() {
        let html = view_html(&[project("main", "X")]);
        assert!(html.contains(r#"id="work""#));
        assert!(html.contains("app-showcase"));
    }

    #[test]
    fn render_featured_has_description_secondary_does_not() {
        let mut main = project("main", "X");
        main.description = "Featured description".to_string();
        let mut side = secondary("s1", "Y");
        side.description = "Hidden description".to_string();
        let html = view_html(&[main, side]);

        assert!(html.contains("<h2>X</h2>"));
        assert!(html.contains("Featured description"));
        assert!(html.contains("<h2>Y</h2>"));
        assert!(!html.contains("Hidden description"));
    }

    #[test]
    fn render_applies_tints() {
        let html = view_html(&[project("main", "X"), tinted("s1", "Y", "#111")]);
        assert!(html.contains(r##"style="background-color: #111""##));
        assert!(html.contains(r##"style="background-color: #FFE7EB""##));
    }

    #[test]
    fn render_empty_catalog_without_failure() {
        let html = view_html(&[]);
        assert!(html.contains(r#"id="showcase-featured""#));
        assert!(html.contains(r#"id="showcase-slot-0""#));
        assert!(html.contains(r#"id="showcase-slot-1""#));
        assert!(html.contains(r#"alt="Project Image""#));
        assert!(!html.contains("src="));
    }

    #[test]
    fn render_image_sources() {
        let mut main = project("main", "X");
        main.img_path = "/images/main.png".to_string();
        let html = view_html(&[main]);
        assert!(html.contains(r#"src="/images/main.png""#));
    }

    #[test]
    fn render_escapes_titles() {
        let html = view_html(&[project("main", "<b>X</b>")]);
        assert!(html.contains("&lt;b&gt;X&lt;/b&gt;"));
    }

    // =========================================================================
    // Animations
    // =========================================================================

    #[test]
    fn mount_registers_fade_then_three_cards() {
        let motion = AnimationConfig::default();
        let projects = [project("main", "X")];
        let mut timeline = Timeline::new();
        ShowcaseView::new(&projects, &motion).mount(&mut timeline);

        let ids: Vec<&str> = timeline
            .registrations()
            .iter()
            .map(|r| r.element.as_str())
            .collect();
        assert_eq!(
            ids,
            vec!["work", "showcase-featured", "showcase-slot-0", "showcase-slot-1"]
        );
    }

    #[test]
    fn section_fade_has_no_trigger() {
        let motion = AnimationConfig::default();
        let mut timeline = Timeline::new();
        ShowcaseView::new(&[], &motion).mount(&mut timeline);

        let fade = timeline.find("work").unwrap();
        assert!(fade.trigger.is_none());
        assert_eq!(fade.from, AnimState::opacity(0.0));
        assert_eq!(fade.to, AnimState::opacity(1.0));
        assert_eq!(fade.timing.duration, 1.5);
        assert_eq!(fade.timing.delay, 0.0);
    }

    #[test]
    fn cards_are_staggered_and_triggered_on_themselves() {
        let motion = AnimationConfig::default();
        let mut timeline = Timeline::new();
        ShowcaseView::new(&[], &motion).mount(&mut timeline);

        let expected_delays = [0.3_f32, 0.6, 0.9];
        for (reg, expected) in timeline.registrations()[1..].iter().zip(expected_delays) {
            assert!((reg.timing.delay - expected).abs() < 1e-6);
            assert_eq!(reg.timing.duration, 1.0);
            assert_eq!(reg.from.y, Some(50.0));
            assert_eq!(reg.from.opacity, Some(0.0));
            assert_eq!(reg.to.y, Some(0.0));
            assert_eq!(reg.to.opacity, Some(1.0));

            let trigger = reg.trigger.as_ref().unwrap();
            assert_eq!(trigger.trigger, reg.element);
            assert_eq!(trigger.start.to_string(), "top bottom-=100");
        }
    }

    #[test]
    fn fade_survives_without_scroll_triggers() {
        // A port that only plays untriggered registrations still gets the fade.
        #[derive(Default)]
        struct MountOnly(Vec<Registration>);
        impl AnimationPort for MountOnly {
            fn register(&mut self, registration: Registration) {
                if registration.trigger.is_none() {
                    self.0.push(registration);
                }
            }
        }

        let motion = AnimationConfig::default();
        let mut port = MountOnly::default();
        ShowcaseView::new(&[], &motion).mount(&mut port);
        assert_eq!(port.0.len(), 1);
        assert_eq!(port.0[0].element.as_str(), "work");
    }

    #[test]
    fn mount_uses_configured_timings() {
        let motion = AnimationConfig {
            section_fade: 0.5,
            card_duration: 2.0,
            card_offset: 20.0,
            stagger: 0.1,
            trigger_offset: 40.0,
        };
        let mut timeline = Timeline::new();
        ShowcaseView::new(&[], &motion).mount(&mut timeline);

        assert_eq!(timeline.find("work").unwrap().timing.duration, 0.5);
        let slot1 = timeline.find("showcase-slot-1").unwrap();
        assert!((slot1.timing.delay - 0.3).abs() < 1e-6);
        assert_eq!(slot1.from.y, Some(20.0));
        assert_eq!(
            slot1.trigger.as_ref().unwrap().start.to_string(),
            "top bottom-=40"
        );
    }

    #[test]
    fn noop_port_leaves_render_unchanged() {
        let motion = AnimationConfig::default();
        let projects = [project("main", "X")];
        let view = ShowcaseView::new(&projects, &motion);
        let before = view.render().into_string();
        view.mount(&mut NoopPort);
        assert_eq!(view.render().into_string(), before);
    }
}
