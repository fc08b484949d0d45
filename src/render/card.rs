use chrono::NaiveDate;

use super::theme::{Palette, Theme};
use crate::stats::StreakStats;
use crate::streak::DateRange;

const FONT: &str = "'Segoe UI', Ubuntu, sans-serif";

const FLAME_PATH: &str = "M 1.5 0.67 C 1.5 0.67 2.24 3.32 2.24 5.47 C 2.24 7.53 0.89 9.2 -1.17 9.2 \
C -3.23 9.2 -4.79 7.53 -4.79 5.47 L -4.76 5.11 C -6.78 7.51 -8 10.62 -8 13.99 \
C -8 18.41 -4.42 22 0 22 C 4.42 22 8 18.41 8 13.99 C 8 8.6 5.41 3.79 1.5 0.67 Z \
M -0.29 19 C -2.07 19 -3.51 17.6 -3.51 15.86 C -3.51 14.24 -2.46 13.1 -0.7 12.74 \
C 1.07 12.38 2.9 11.53 3.92 10.16 C 4.31 11.45 4.51 12.81 4.51 14.2 C 4.51 16.85 2.36 19 -0.29 19 Z";

fn format_day(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

pub fn format_range(range: Option<DateRange>) -> String {
    match range {
        Some(range) => format!("{} - {}", format_day(range.start), format_day(range.end)),
        None => "N/A".to_string(),
    }
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn light_rules(p: &Palette) -> String {
    format!(
        r#"
        .bg {{ fill: {bg}; stroke: {border}; }}
        .divider {{ stroke: {border}; }}
        .text-accent {{ fill: {accent}; font-family: {FONT}; font-weight: 700; font-size: 28px; }}
        .text-label {{ fill: {label}; font-family: {FONT}; font-size: 14px; }}
        .text-range {{ fill: {range}; font-family: {FONT}; font-size: 12px; }}
        .text-current {{ fill: {current}; font-family: {FONT}; font-weight: 700; font-size: 28px; }}
        .ring {{ stroke: {accent}; }}
        .fire {{ fill: {fire}; }}"#,
        bg = p.bg,
        border = p.border,
        accent = p.accent,
        label = p.label,
        range = p.range,
        current = p.current,
        fire = p.fire,
    )
}

fn dark_rules(p: &Palette) -> String {
    format!(
        r#"
        @media (prefers-color-scheme: dark) {{
            .bg {{ fill: {bg}; stroke: {border}; }}
            .divider {{ stroke: {border}; }}
            .text-accent {{ fill: {accent}; }}
            .text-label {{ fill: {label}; }}
            .text-range {{ fill: {range}; }}
            .text-current {{ fill: {current}; }}
            .ring {{ stroke: {accent}; }}
            .fire {{ fill: {fire}; }}
        }}"#,
        bg = p.bg,
        border = p.border,
        accent = p.accent,
        label = p.label,
        range = p.range,
        current = p.current,
        fire = p.fire,
    )
}

/// Centered text element fading in after `delay` seconds.
fn text(x: f64, y: f64, class: &str, delay: f64, content: &str, extra_style: &str) -> String {
    format!(
        r#"<text x="{x}" y="{y}" text-anchor="middle" class="{class}" style="opacity: 0; animation: fadein 0.5s linear forwards {delay}s{extra_style}">{}</text>"#,
        escape_xml(content)
    )
}

/// Renders the three-column streak card as a standalone SVG document.
pub fn render_card(stats: &StreakStats, theme: &Theme) -> String {
    let lifetime_label = format!("{} - Present", format_day(stats.account_created_at.date_naive()));
    let longest_range = format_range(stats.streaks.longest_streak_range);
    let today_label = stats.today.format("%b %d").to_string();

    let total = stats.total_contributions.to_string();
    let current = stats.streaks.current_streak.to_string();
    let longest = stats.streaks.longest_streak.to_string();

    let elements = [
        text(82.5, 80.0, "text-accent", 0.6, &total, ""),
        text(82.5, 116.0, "text-label", 0.7, "Total Contributions", ""),
        text(82.5, 146.0, "text-range", 0.8, &lifetime_label, ""),
        text(247.5, 140.0, "text-current", 0.9, "Current Streak", "; font-size: 14px;"),
        text(247.5, 166.0, "text-range", 0.9, &today_label, ""),
        r#"<g mask="url(#mask_out_ring_behind_fire)"><circle cx="247.5" cy="71" r="40" fill="none" stroke-width="5" class="ring" style="opacity: 0; animation: fadein 0.5s linear forwards 0.4s"/></g>"#
            .to_string(),
        format!(
            r#"<g transform="translate(247.5, 19.5)" style="opacity: 0; animation: fadein 0.5s linear forwards 0.6s"><path d="M -12 -0.5 L 15 -0.5 L 15 23.5 L -12 23.5 L -12 -0.5 Z" fill="none"/><path d="{FLAME_PATH}" class="fire"/></g>"#
        ),
        format!(
            r#"<text x="247.5" y="80" text-anchor="middle" class="text-current" style="animation: currstreak 0.6s linear forwards">{}</text>"#,
            escape_xml(&current)
        ),
        text(412.5, 80.0, "text-accent", 1.2, &longest, ""),
        text(412.5, 116.0, "text-label", 1.3, "Longest Streak", ""),
        text(412.5, 146.0, "text-range", 1.4, &longest_range, ""),
    ];

    format!(
        r#"<?xml version="1.0" encoding="utf-8" ?>
<svg xmlns="http://www.w3.org/2000/svg" width="495px" height="195px" viewBox="0 0 495 195">
<defs>
<style>
        @keyframes currstreak {{
            0% {{ font-size: 3px; opacity: 0.2; }}
            80% {{ font-size: 34px; opacity: 1; }}
            100% {{ font-size: 28px; opacity: 1; }}
        }}
        @keyframes fadein {{
            0% {{ opacity: 0; }}
            100% {{ opacity: 1; }}
        }}
{light}
{dark}
</style>
<clipPath id="outer_rectangle"><rect x="0" y="0" width="495" height="195" rx="4.5"/></clipPath>
<mask id="mask_out_ring_behind_fire"><rect x="0" y="0" width="495" height="195" fill="white"/><ellipse cx="247.5" cy="32" rx="13" ry="18" fill="black"/></mask>
</defs>
<g clip-path="url(#outer_rectangle)">
<rect x="0.5" y="0.5" width="494" height="194" rx="4.5" class="bg"/>
<line x1="165" y1="28" x2="165" y2="170" stroke-width="1" class="divider"/>
<line x1="330" y1="28" x2="330" y2="170" stroke-width="1" class="divider"/>
{body}
</g>
</svg>
"#,
        light = light_rules(&theme.light),
        dark = dark_rules(&theme.dark),
        body = elements.join("\n"),
    )
}
