//! Page templates compiled into the binary.
//!
//! Templates are looked up by name from [`TEMPLATES`] the first time they are
//! rendered. Every name ends in `.html`, which turns on HTML auto-escaping for
//! all interpolated values.

use chrono::{Datelike, Utc};
use minijinja::{Environment, Value};

use super::careers::{RESUME_ACCEPT, RESUME_HINT};
use super::content::{COMPANY, FOOTER_CTA, FOOTER_CTA_LINK, NAV_LINKS, TAGLINE};

/// Name and source of every embedded template.
pub const TEMPLATES: &[(&str, &str)] = &[
    ("layout.html", include_str!("../../templates/layout.html")),
    ("macros.html", include_str!("../../templates/macros.html")),
    ("form.html", include_str!("../../templates/form.html")),
    ("landing.html", include_str!("../../templates/landing.html")),
    ("careers.html", include_str!("../../templates/careers.html")),
    ("job.html", include_str!("../../templates/job.html")),
    ("not_found.html", include_str!("../../templates/not_found.html")),
];

/// Environment with the embedded loader and the globals the layout needs.
pub fn environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_loader(|name| {
        Ok(TEMPLATES
            .iter()
            .find(|(known, _)| *known == name)
            .map(|(_, source)| (*source).to_string()))
    });

    env.add_global("company", COMPANY);
    env.add_global("tagline", TAGLINE);
    env.add_global("footer_cta", FOOTER_CTA);
    env.add_global("footer_cta_link", FOOTER_CTA_LINK);
    env.add_global("nav_links", Value::from_serialize(NAV_LINKS));
    env.add_global("resume_accept", RESUME_ACCEPT);
    env.add_global("resume_hint", RESUME_HINT);
    env.add_function("current_year", current_year);
    env
}

fn current_year() -> i32 {
    Utc::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_embedded_template_compiles() {
        let env = environment();
        for (name, _) in TEMPLATES {
            env.get_template(name)
                .unwrap_or_else(|err| panic!("{name} failed to compile: {err}"));
        }
    }

    #[test]
    fn unknown_template_is_reported() {
        let err = environment()
            .get_template("missing.html")
            .expect_err("no such template");
        assert_eq!(err.kind(), minijinja::ErrorKind::TemplateNotFound);
    }
}
