//! # Folio
//!
//! A static generator for a one-page developer portfolio. Every piece of
//! text, every image path and every project lives in one declarative
//! catalog; the generator turns it into a single `index.html` with a
//! fingerprinted stylesheet and a small animation runtime.
//!
//! # Architecture
//!
//! Data flows one way:
//!
//! ```text
//! content.toml ─► Catalog ─► section views ─► Markup ──────► index.html
//!                                   │
//! config.toml ─► SiteConfig ────────┤
//!                                   └─► AnimationPort ─► Timeline JSON
//! ```
//!
//! The catalog is loaded once and never mutated. Views receive the slices
//! they need at construction and resolve every missing field through named
//! fallback rules, so rendering cannot fail. Views that animate describe
//! their entrances to an [`animation::AnimationPort`] instead of talking to
//! an engine; the generator collects them on a [`animation::Timeline`] and
//! embeds it in the page for `static/motion.js` to play.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`content`] | Catalog records, `content.toml` loading, project diagnostics |
//! | [`showcase`] | The work section: featured + two secondary project cards |
//! | [`sections`] | Every other page section (hero, counters, experience, ...) |
//! | [`animation`] | Animation port, registrations, scroll-trigger notation |
//! | [`config`] | `config.toml` loading, merging over stock defaults, validation, CSS variables |
//! | [`generate`] | Page assembly and output files |
//! | [`fingerprint`] | Content-hashed asset names |
//! | [`output`] | CLI output formatting for `check` and `build` |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/). Templates are
//! plain Rust expressions: every catalog field is type-checked and
//! auto-escaped, and there is no template directory to ship.
//!
//! ## Fallbacks Are Rules, Not Inline Defaults
//!
//! A project with no alt text renders `"Project Image"`; a secondary slot
//! with no tint renders its slot color. These live as functions in
//! [`showcase`] ([`showcase::alt_or_default`], [`showcase::tint_for`]) so the
//! behavior for absent and empty fields is stated once and tested directly.
//!
//! ## No JavaScript Required to Read the Page
//!
//! Animations start from states applied by the runtime itself. With
//! scripting disabled, or with `prefers-reduced-motion`, every element is
//! shown at rest.

pub mod animation;
pub mod config;
pub mod content;
pub mod fingerprint;
pub mod generate;
pub mod output;
pub mod sections;
pub mod showcase;

#[cfg(test)]
pub(crate) mod test_helpers;
