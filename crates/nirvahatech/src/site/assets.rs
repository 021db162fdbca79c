//! Stylesheet and script embedded in the binary.

pub const SITE_CSS: &str = r#":root {
  --primary: #2563eb;
  --secondary: #7c3aed;
  --ink: #111827;
  --muted: #4b5563;
  --danger: #dc2626;
  --success: #16a34a;
}
* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, -apple-system, "Segoe UI", sans-serif; color: var(--ink); line-height: 1.6; }
main { display: block; }
a { color: var(--primary); }
.site-header { position: sticky; top: 0; display: flex; justify-content: space-between; align-items: center; padding: 1rem 2rem; background: rgba(255, 255, 255, 0.95); box-shadow: 0 1px 4px rgba(0, 0, 0, 0.08); z-index: 10; }
.site-header nav a { margin-left: 1.5rem; text-decoration: none; color: var(--ink); }
.brand { font-weight: 800; font-size: 1.25rem; text-decoration: none; color: var(--ink); }
section { padding: 4rem 2rem; max-width: 72rem; margin: 0 auto; }
.hero { text-align: center; padding-top: 7rem; }
.hero h1 { font-size: 3rem; line-height: 1.1; }
.highlight { background: linear-gradient(90deg, var(--primary), var(--secondary)); -webkit-background-clip: text; background-clip: text; color: transparent; }
.button { display: inline-block; padding: 0.75rem 1.5rem; border-radius: 0.75rem; background: var(--primary); color: #fff; text-decoration: none; font-weight: 600; }
.button.ghost { background: transparent; color: var(--primary); border: 1px solid var(--primary); }
.stats { display: grid; grid-template-columns: repeat(4, 1fr); gap: 2rem; text-align: center; margin: 3rem 0; }
.counter { display: block; font-size: 3rem; font-weight: 900; }
.grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr)); gap: 1.5rem; }
.card { padding: 1.5rem; border-radius: 1rem; border: 1px solid #e5e7eb; }
.dark { background: #111827; color: #f9fafb; max-width: none; }
.dark .card { border-color: rgba(255, 255, 255, 0.1); }
figure img { max-width: 100%; }
blockquote { margin: 0; padding: 1.5rem; border-left: 4px solid var(--primary); background: #f9fafb; }
.lead-form { display: grid; gap: 1rem; max-width: 40rem; }
.field label { display: block; font-weight: 600; margin-bottom: 0.25rem; }
.field input, .field textarea { width: 100%; padding: 0.75rem; border: 1px solid #d1d5db; border-radius: 0.5rem; font: inherit; }
.field [aria-invalid="true"] { border-color: var(--danger); }
.field-error { color: var(--danger); font-size: 0.875rem; margin: 0.25rem 0 0; }
.field-hint { color: var(--muted); font-size: 0.75rem; }
.form-banner { padding: 1rem; border-radius: 0.5rem; background: #fef2f2; color: var(--danger); border: 1px solid #fecaca; }
.form-success { padding: 2rem; border-radius: 1rem; background: #f0fdf4; border: 1px solid #bbf7d0; text-align: center; }
.form-note { color: var(--muted); font-size: 0.875rem; text-align: center; }
button[type="submit"] { padding: 0.875rem; border: 0; border-radius: 0.75rem; background: var(--primary); color: #fff; font-weight: 700; cursor: pointer; }
button[disabled] { opacity: 0.6; cursor: progress; }
.job-list { list-style: none; padding: 0; display: grid; gap: 1.5rem; }
.job-card { padding: 1.5rem; border: 1px solid #e5e7eb; border-radius: 1rem; }
.job-meta span { margin-right: 1rem; color: var(--muted); }
.job-layout { display: grid; grid-template-columns: 2fr 1fr; gap: 3rem; max-width: 72rem; margin: 0 auto; padding: 0 2rem 4rem; }
.apply-panel { position: sticky; top: 6rem; align-self: start; padding: 1.5rem; border: 1px solid #e5e7eb; border-radius: 1rem; }
.tags { display: flex; flex-wrap: wrap; gap: 0.5rem; list-style: none; padding: 0; }
.tags li { padding: 0.25rem 0.75rem; border-radius: 999px; background: #eef2ff; }
dialog { max-width: 40rem; width: 90vw; border: 0; border-radius: 1rem; box-shadow: 0 20px 40px rgba(0, 0, 0, 0.25); }
.dialog-close { float: right; font-size: 1.5rem; text-decoration: none; }
.site-footer { padding: 3rem 2rem; background: #111827; color: #d1d5db; text-align: center; }
.site-footer a { color: #fff; }
[data-reveal] { opacity: 0; transform: translateY(30px); transition: opacity 0.8s ease, transform 0.8s ease; }
[data-reveal].revealed { opacity: 1; transform: none; }
@media (prefers-reduced-motion: reduce) { [data-reveal] { opacity: 1; transform: none; transition: none; } }
@media (max-width: 48rem) { .stats { grid-template-columns: repeat(2, 1fr); } .job-layout { grid-template-columns: 1fr; } }
"#;

/// Reveal-on-scroll, stat counters, submit guard, and success revert.
///
/// Sections are revealed once and never re-armed. The submit guard disables
/// the button on the first submit so the browser sends one request.
pub const SITE_JS: &str = r#"(function () {
  "use strict";

  function animateCounter(el) {
    var target = parseFloat(el.dataset.target || "0");
    var decimals = parseInt(el.dataset.decimals || "0", 10);
    var prefix = el.dataset.prefix || "";
    var suffix = el.dataset.suffix || "";
    var duration = 2000;
    var start = null;
    function frame(now) {
      if (start === null) start = now;
      var progress = Math.min((now - start) / duration, 1);
      var eased = 1 - Math.pow(1 - progress, 3);
      el.textContent = prefix + (target * eased).toFixed(decimals) + suffix;
      if (progress < 1) window.requestAnimationFrame(frame);
    }
    window.requestAnimationFrame(frame);
  }

  function reveal(section) {
    section.classList.add("revealed");
    section.querySelectorAll("[data-counter]").forEach(animateCounter);
  }

  var sections = document.querySelectorAll("[data-reveal]");
  if ("IntersectionObserver" in window) {
    var observer = new IntersectionObserver(function (entries) {
      entries.forEach(function (entry) {
        if (entry.isIntersecting) {
          observer.unobserve(entry.target);
          reveal(entry.target);
        }
      });
    }, { threshold: 0.2 });
    sections.forEach(function (section) { observer.observe(section); });
  } else {
    sections.forEach(reveal);
  }

  document.querySelectorAll("form.lead-form").forEach(function (form) {
    form.addEventListener("submit", function (event) {
      var button = form.querySelector("button[type=submit]");
      if (!button) return;
      if (button.disabled) {
        event.preventDefault();
        return;
      }
      button.disabled = true;
      button.textContent = button.dataset.submittingLabel || "Submitting...";
    });
  });

  document.querySelectorAll("[data-success-revert]").forEach(function (panel) {
    var delay = parseInt(panel.dataset.successRevert, 10) || 5000;
    window.setTimeout(function () {
      window.location.replace(panel.dataset.revertHref || window.location.pathname);
    }, delay);
  });
})();
"#;
