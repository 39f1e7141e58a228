use std::fmt::Write;

use crate::consts::MAIL_SUBJECT;
use crate::core::AlbumTable;
use crate::output::format::html_escape;

const GREETING: &str =
    "Happy Monday! Here's a list of recently released music from the past week.";

/// HTML message body for the weekly mail. Days without releases are left out;
/// each day's first row spans all of its releases.
pub(crate) fn output_album_html(albums: &AlbumTable) -> String {
    let mut rows = String::new();
    for day in albums.days.values().filter(|d| !d.records.is_empty()) {
        for (i, record) in day.records.iter().enumerate() {
            rows.push_str("        <tr>\n");
            if i == 0 {
                let _ = writeln!(
                    rows,
                    "          <th rowspan=\"{}\" valign=\"top\">{}</th>",
                    day.records.len(),
                    html_escape(&day.marker)
                );
            }
            let _ = writeln!(rows, "          <td>{}</td>", html_escape(&record.artist));
            let _ = writeln!(rows, "          <td>{}</td>", html_escape(&record.title));
            rows.push_str("        </tr>\n");
        }
    }

    format!(
        "<html>
  <head><title>{subject}</title></head>
  <body>
    <p>{GREETING}</p>
    <table border=\"1\">
      <thead>
        <tr><th>Date</th><th>Artist</th><th>Album/EP Title</th></tr>
      </thead>
      <tbody>
{rows}      </tbody>
    </table>
  </body>
</html>
",
        subject = html_escape(MAIL_SUBJECT),
    )
}
