//! HTML pages.
//!
//! ## Summary
//! Pure functions from a page payload to markup. Every user-supplied string
//! goes through [`escape_html`]. The countdown itself runs in the browser,
//! from the deadline and the server clock embedded as data attributes.

use tminus_core::constants::{CREATE_ROUTE_PREFIX, event_path};
use tminus_service::event::{EventSummary, EventView};

/// Payload for the landing page.
#[derive(Debug, Clone)]
pub struct IndexPage {
    pub events: Vec<EventSummary>,
    pub server_utc_now: String,
}

const STYLE: &str = "body{font-family:system-ui,sans-serif;max-width:40rem;margin:2rem auto;padding:0 1rem}\
form{display:grid;gap:.5rem;margin-bottom:2rem}\
.countdown{font-size:2.5rem;font-variant-numeric:tabular-nums}\
.muted{color:#666;font-size:.9rem}";

// Converts the datetime-local value to UTC before submit, and drives any
// `.countdown` element from its data attributes.
const SCRIPT: &str = r#"(function () {
  var form = document.getElementById("create-form");
  if (form) {
    form.addEventListener("submit", function () {
      var local = form.querySelector("[name=until_local]");
      var iso = form.querySelector("[name=until_iso]");
      if (local && local.value && !iso.value) {
        iso.value = new Date(local.value).toISOString();
      }
    });
  }
  var el = document.querySelector(".countdown");
  if (!el) { return; }
  var until = Date.parse(el.dataset.until);
  var skew = Date.parse(el.dataset.serverNow) - Date.now();
  function pad(n) { return String(n).padStart(2, "0"); }
  function tick() {
    var left = Math.max(0, until - (Date.now() + skew));
    var s = Math.floor(left / 1000);
    var d = Math.floor(s / 86400);
    el.textContent = d + "d " + pad(Math.floor(s / 3600) % 24) + ":" +
      pad(Math.floor(s / 60) % 60) + ":" + pad(s % 60);
    if (left > 0) { setTimeout(tick, 250); }
  }
  tick();
})();"#;

/// ## Summary
/// Escapes text for use in HTML element content and quoted attributes.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}\n\
         <script>{SCRIPT}</script>\n</body>\n</html>\n",
        title = escape_html(title),
    )
}

/// ## Summary
/// Renders the landing page: creation form plus the most recent events.
#[must_use]
pub fn render_index(page: &IndexPage) -> String {
    let mut body = format!(
        "<h1>New countdown</h1>\n\
         <form id=\"create-form\" method=\"post\" action=\"{CREATE_ROUTE_PREFIX}\">\n\
         <label>Title <input name=\"title\" maxlength=\"200\" required></label>\n\
         <label>Ends at <input type=\"datetime-local\" name=\"until_local\" required></label>\n\
         <input type=\"hidden\" name=\"until_iso\">\n\
         <button type=\"submit\">Create link</button>\n\
         </form>\n\
         <p class=\"muted\">Server time (UTC): <time datetime=\"{now}\">{now}</time></p>\n",
        now = escape_html(&page.server_utc_now),
    );

    if page.events.is_empty() {
        body.push_str("<p class=\"muted\">No countdowns yet.</p>\n");
    } else {
        body.push_str("<h2>Recent</h2>\n<ul>\n");
        for event in &page.events {
            body.push_str(&format!(
                "<li><a href=\"{href}\">{title}</a> <span class=\"muted\">until \
                 <time datetime=\"{until}\">{until}</time></span></li>\n",
                href = escape_html(&event_path(&event.slug)),
                title = escape_html(&event.title),
                until = escape_html(&event.until_iso),
            ));
        }
        body.push_str("</ul>\n");
    }

    layout("Countdowns", &body)
}

/// ## Summary
/// Renders the countdown page for one event.
#[must_use]
pub fn render_event(view: &EventView) -> String {
    let body = format!(
        "<h1>{title}</h1>\n\
         <p class=\"countdown\" data-until=\"{until}\" data-server-now=\"{now}\">&nbsp;</p>\n\
         <p class=\"muted\">Ends <time datetime=\"{until}\">{until}</time> \
         &middot; link <code>{path}</code></p>\n\
         <p><a href=\"/\">Create another</a></p>",
        title = escape_html(&view.event.title),
        until = escape_html(&view.event.until_iso),
        now = escape_html(&view.server_utc_now),
        path = escape_html(&event_path(&view.event.slug)),
    );

    layout(&view.event.title, &body)
}
