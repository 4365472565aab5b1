//! Scroll/parallax enhancement.
//!
//! The pass has two halves. [`enhance_fragment`] rewrites one block's
//! markup: a category class on the outer section, a `data-scroll-effect`
//! attribute when none is present, and a tilt attribute on card elements
//! of card-like categories. [`inject_shared`] adds the one shared CSS
//! and JS payload to the document, exactly once no matter how many
//! blocks matched.

use super::document::HtmlDocument;

/// Marker identifying the shared payload inside the document slots.
const SHARED_MARKER: &str = "scroll-effects shared payload";

/// Visual categories recognized by the enhancer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollCategory {
    Hero,
    Features,
    Gallery,
    Testimonials,
    Pricing,
    Services,
    Content,
    Faq,
}

impl ScrollCategory {
    /// The CSS class added to matched fragments.
    pub fn class(self) -> &'static str {
        match self {
            ScrollCategory::Hero => "hero--parallax",
            ScrollCategory::Features => "features--parallax",
            ScrollCategory::Gallery => "gallery--parallax",
            ScrollCategory::Testimonials => "testimonials--parallax",
            ScrollCategory::Pricing => "pricing--parallax",
            ScrollCategory::Services => "services--parallax",
            ScrollCategory::Content => "content--parallax",
            ScrollCategory::Faq => "faq--parallax",
        }
    }

    /// Card-like categories additionally get the tilt interaction.
    pub fn is_card_like(self) -> bool {
        matches!(
            self,
            ScrollCategory::Pricing | ScrollCategory::Services | ScrollCategory::Testimonials
        )
    }
}

/// Maps a block type to its visual category, if any.
pub fn scroll_category(block_type: &str) -> Option<ScrollCategory> {
    let block_type = block_type.to_ascii_lowercase();
    // Substring match so composed types like "services-quick" still map.
    for (needle, category) in [
        ("hero", ScrollCategory::Hero),
        ("features", ScrollCategory::Features),
        ("gallery", ScrollCategory::Gallery),
        ("testimonials", ScrollCategory::Testimonials),
        ("pricing", ScrollCategory::Pricing),
        ("services", ScrollCategory::Services),
        ("content", ScrollCategory::Content),
        ("faq", ScrollCategory::Faq),
    ] {
        if block_type.contains(needle) {
            return Some(category);
        }
    }
    None
}

/// Applies the per-fragment half of the pass to one block's markup.
///
/// Unmatched block types pass through untouched.
pub fn enhance_fragment(block_type: &str, html: &str) -> String {
    let Some(category) = scroll_category(block_type) else {
        return html.to_string();
    };

    let mut html = add_class_to_first_section(html, category.class());
    if !html.contains("data-scroll-effect") {
        html = add_attr_to_first_section(&html, r#"data-scroll-effect="fade-up""#);
    }
    if category.is_card_like() {
        html = add_tilt_to_cards(&html);
    }
    html
}

/// Pushes the shared CSS/JS payload into the document, once.
pub fn inject_shared(doc: &mut HtmlDocument) {
    if doc.has_style_containing(SHARED_MARKER) {
        return;
    }
    doc.push_style(shared_css());
    doc.push_script(shared_js());
}

fn add_class_to_first_section(html: &str, class: &str) -> String {
    let Some(section_start) = html.find("<section") else {
        return html.to_string();
    };
    let Some(tag_end) = html[section_start..].find('>') else {
        return html.to_string();
    };
    let tag_end = section_start + tag_end;

    if let Some(class_pos) = html[section_start..tag_end].find("class=\"") {
        // Append to the existing class attribute.
        let insert_at = section_start + class_pos + "class=\"".len();
        let Some(close) = html[insert_at..tag_end].find('"') else {
            return html.to_string();
        };
        let mut out = String::with_capacity(html.len() + class.len() + 1);
        out.push_str(&html[..insert_at + close]);
        out.push(' ');
        out.push_str(class);
        out.push_str(&html[insert_at + close..]);
        out
    } else {
        // No class attribute on the section tag: add one.
        let mut out = String::with_capacity(html.len() + class.len() + 10);
        out.push_str(&html[..section_start + "<section".len()]);
        out.push_str(&format!(r#" class="{class}""#));
        out.push_str(&html[section_start + "<section".len()..]);
        out
    }
}

fn add_attr_to_first_section(html: &str, attr: &str) -> String {
    let Some(section_start) = html.find("<section") else {
        return html.to_string();
    };
    let insert_at = section_start + "<section".len();
    let mut out = String::with_capacity(html.len() + attr.len() + 1);
    out.push_str(&html[..insert_at]);
    out.push(' ');
    out.push_str(attr);
    out.push_str(&html[insert_at..]);
    out
}

/// Adds `data-tilt` after every class attribute containing "card".
fn add_tilt_to_cards(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(start) = rest.find("class=\"") {
        let value_start = start + "class=\"".len();
        let Some(value_len) = rest[value_start..].find('"') else {
            break;
        };
        let value_end = value_start + value_len;
        let class_value = &rest[value_start..value_end];

        out.push_str(&rest[..value_end + 1]);
        if class_value.contains("card") && !rest[value_end + 1..].starts_with(" data-tilt") {
            out.push_str(" data-tilt");
        }
        rest = &rest[value_end + 1..];
    }
    out.push_str(rest);
    out
}

fn shared_css() -> &'static str {
    concat!(
        "/* scroll-effects shared payload */\n",
        r#"[data-scroll-effect="fade-up"] {
  opacity: 0;
  transform: translateY(50px);
  transition: opacity 0.8s ease-out, transform 0.8s ease-out;
}
[data-scroll-effect="fade-up"].in-view {
  opacity: 1;
  transform: translateY(0);
}
.hero--parallax { position: relative; overflow: hidden; }
.hero--parallax .hero__content {
  transform: translateY(calc(var(--parallax-offset, 0px) * 0.3));
}
[data-tilt] {
  transform: perspective(1000px) rotateX(var(--tilt-x, 0deg)) rotateY(var(--tilt-y, 0deg));
  transition: transform 0.2s ease-out;
}
@media (prefers-reduced-motion: reduce) {
  [data-scroll-effect="fade-up"] {
    opacity: 1;
    transform: none;
    transition: none;
  }
  [data-tilt] { transform: none; }
}
"#
    )
}

fn shared_js() -> &'static str {
    concat!(
        "// scroll-effects shared payload\n",
        r#"(function () {
  'use strict';

  var ticking = false;

  function updateParallax() {
    var offset = window.scrollY;
    document.querySelectorAll('.hero--parallax').forEach(function (hero) {
      hero.style.setProperty('--parallax-offset', offset + 'px');
    });
    ticking = false;
  }

  // Single scroll listener driving every transform update.
  window.addEventListener('scroll', function () {
    if (!ticking) {
      window.requestAnimationFrame(updateParallax);
      ticking = true;
    }
  });

  var observer = new IntersectionObserver(function (entries) {
    entries.forEach(function (entry) {
      if (entry.isIntersecting) {
        entry.target.classList.add('in-view');
        observer.unobserve(entry.target);
      }
    });
  }, { threshold: 0.1 });

  document.querySelectorAll('[data-scroll-effect]').forEach(function (element) {
    observer.observe(element);
  });

  document.querySelectorAll('[data-tilt]').forEach(function (element) {
    element.addEventListener('mousemove', function (event) {
      var rect = element.getBoundingClientRect();
      var tiltX = ((event.clientY - rect.top - rect.height / 2) / rect.height) * 10;
      var tiltY = ((rect.width / 2 - (event.clientX - rect.left)) / rect.width) * 10;
      element.style.setProperty('--tilt-x', tiltX + 'deg');
      element.style.setProperty('--tilt-y', tiltY + 'deg');
    });
    element.addEventListener('mouseleave', function () {
      element.style.setProperty('--tilt-x', '0deg');
      element.style.setProperty('--tilt-y', '0deg');
    });
  });

  updateParallax();
})();
"#
    )
}
