//! Development-only live-reload client injection.
//!
//! The injected script keeps a persistent `EventSource` connection to
//! the preview server. A `reload` event reloads the page; on connection
//! loss the client retries with a fixed backoff and force-reloads after
//! too many failed attempts. Production exports never carry this script.

use super::document::HtmlDocument;

/// SSE endpoint the injected client connects to.
pub const DEFAULT_EVENTS_PATH: &str = "/_dev/events";

/// Marker identifying the client inside the document's script slot.
const CLIENT_MARKER: &str = "sitewright dev reload client";

/// Fixed reconnect backoff, in milliseconds.
const RETRY_DELAY_MS: u32 = 2000;

/// Failed reconnect attempts before the client force-reloads the page.
const MAX_RETRIES: u32 = 5;

/// The client script connecting to the given SSE endpoint.
pub fn client_script(events_path: &str) -> String {
    format!(
        r#"// {CLIENT_MARKER}
(function () {{
  'use strict';

  var attempts = 0;

  function connect() {{
    var source = new EventSource('{events_path}');
    source.addEventListener('connected', function () {{
      attempts = 0;
    }});
    source.addEventListener('reload', function () {{
      window.location.reload();
    }});
    source.onerror = function () {{
      source.close();
      attempts += 1;
      if (attempts >= {MAX_RETRIES}) {{
        window.location.reload();
        return;
      }}
      setTimeout(connect, {RETRY_DELAY_MS});
    }};
  }}

  connect();
}})();
"#
    )
}

/// Pushes the reload client into the document, once.
pub fn inject(doc: &mut HtmlDocument, events_path: &str) {
    if doc.has_script_containing(CLIENT_MARKER) {
        return;
    }
    doc.push_script(client_script(events_path));
}
