//! Report rendering: a deterministic pure function from (header, entries)
//! to the PDF bytes. The whole document is rebuilt on every call; there is
//! no incremental patching, so the artifact can never drift out of sync
//! with the in-memory log.

use crate::report::pdf::PdfManager;
use crate::session::{LogEntry, SessionHeader};
use crate::utils::time::CLOCK_PLACEHOLDER;

pub fn render(header: &SessionHeader, entries: &[LogEntry]) -> Vec<u8> {
    let title = format!("Time-Keeper : [{}]", header.login_date);
    let rows = header_rows(header);
    let disclaimer = disclaimer_text();

    let mut pdf = PdfManager::new();
    pdf.write_report(&title, &rows, entries, &disclaimer);
    pdf.finish()
}

/// Header table rows, in the fixed order the report promises.
fn header_rows(h: &SessionHeader) -> Vec<(String, String)> {
    let or_placeholder =
        |v: &Option<String>| v.clone().unwrap_or_else(|| CLOCK_PLACEHOLDER.to_string());

    vec![
        ("Name:".to_string(), h.operator.clone()),
        ("PC Hostname:".to_string(), h.hostname.clone()),
        ("System Make:".to_string(), h.machine_make.clone()),
        ("System Model:".to_string(), h.machine_model.clone()),
        ("Date:".to_string(), h.login_date.clone()),
        ("Login Time:".to_string(), h.login_time.clone()),
        ("Logout Time:".to_string(), or_placeholder(&h.logout_time)),
        ("Hours Worked:".to_string(), or_placeholder(&h.hours_worked)),
        ("Ip:".to_string(), h.location.ip.clone()),
        ("City:".to_string(), h.location.city.clone()),
        ("Region:".to_string(), h.location.region.clone()),
        ("Country:".to_string(), h.location.country.clone()),
        ("Loc:".to_string(), h.location.loc.clone()),
        ("Postal:".to_string(), h.location.postal.clone()),
        ("Timezone:".to_string(), h.location.timezone.clone()),
    ]
}

fn disclaimer_text() -> String {
    format!(
        "This file was generated by the timekeeper application, released under the MIT \
         license, version {}.\n\n\
         The content of this report reflects verbatim the log messages submitted by the \
         operator during the work session. Submitted messages cannot be modified or erased.\n\n\
         This report is sealed for authenticity: a digest of the document is embedded when \
         the session closes, and any later modification of the content invalidates it. \
         Run `timekeeper verify <file>` to check the seal.\n\n\
         Keep the application open for the whole work session so the report reflects the \
         actual time worked. A report that appears inconsistent, incomplete or altered \
         should not be accepted.",
        env!("CARGO_PKG_VERSION")
    )
}
