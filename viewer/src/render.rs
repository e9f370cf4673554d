//! Minimal HTML listing for one page of records.

use crate::model::{DisplayRecord, PageResult};
use std::fmt::Write;

const COLUMNS: [&str; 14] = [
    "ID",
    "Accel X",
    "Accel Y",
    "Accel Z",
    "Gyro X",
    "Gyro Y",
    "Gyro Z",
    "Latitude",
    "Longitude",
    "Time",
    "Speed",
    "Vibration",
    "Temperature",
    "Anomaly",
];

pub fn render_page(page: &PageResult, links: &[u64]) -> String {
    let mut html = String::with_capacity(4096 + page.items.len() * 256);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n<title>Anomaly Data</title>\n</head>\n<body>\n");
    let _ = writeln!(
        html,
        "<h1>Anomaly Data</h1>\n<p>Page {} of {} ({} records)</p>",
        page.page_number, page.total_pages, page.total_records
    );

    html.push_str("<table>\n<thead><tr>");
    for column in COLUMNS {
        let _ = write!(html, "<th>{}</th>", column);
    }
    html.push_str("</tr></thead>\n<tbody>\n");
    for record in &page.items {
        push_row(&mut html, record);
    }
    html.push_str("</tbody>\n</table>\n");

    push_links(&mut html, page.page_number, links);
    html.push_str("</body>\n</html>\n");
    html
}

fn push_row(html: &mut String, record: &DisplayRecord) {
    let _ = writeln!(
        html,
        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
         <td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
        escape_html(&record.id),
        record.accel_x,
        record.accel_y,
        record.accel_z,
        record.gyro_x,
        record.gyro_y,
        record.gyro_z,
        record.latitude,
        record.longitude,
        escape_html(&record.time),
        record.speed,
        record.vibration,
        record.temperature,
        escape_html(&record.anomaly),
    );
}

fn push_links(html: &mut String, current: u64, links: &[u64]) {
    if links.is_empty() {
        return;
    }

    html.push_str("<nav class=\"pagination\">\n");
    for &page in links {
        if page == current {
            let _ = writeln!(html, "<span class=\"current\">{}</span>", page);
        } else {
            let _ = writeln!(html, "<a href=\"/data?page={0}\">{0}</a>", page);
        }
    }
    html.push_str("</nav>\n");
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
