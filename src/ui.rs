use crate::calendar::{CalendarCell, MonthGrid};
use crate::locale::{Locale, Texts};
use crate::models::{Habit, StatsResponse};
use crate::stats::completion_rate;

// Pie slice colours, in habit order.
const SLICE_COLORS: [&str; 5] = ["#8b5cf6", "#a855f7", "#c084fc", "#ddd6fe", "#e5e7eb"];

const RESEARCH: [(&str, &str); 4] = [
    ("64%", "Behavioral Science in Practice (2023)"),
    ("58%", "Atomic Habits Survey (2024)"),
    ("42%", "Atomic Habits Survey (2024)"),
    ("36%", "Atomic Habits Survey (2024)"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Calendar,
    Habits,
    Statistics,
}

impl Tab {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("habits") => Self::Habits,
            Some("statistics") => Self::Statistics,
            _ => Self::Calendar,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::Calendar => "calendar",
            Self::Habits => "habits",
            Self::Statistics => "statistics",
        }
    }

    fn title(self, texts: &Texts) -> &'static str {
        match self {
            Self::Calendar => texts.tab_calendar,
            Self::Habits => texts.tab_habits,
            Self::Statistics => texts.tab_statistics,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Ok,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Ok,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn from_query(message: Option<&str>, kind: Option<&str>) -> Option<Self> {
        let message = message.map(str::trim).filter(|m| !m.is_empty())?;
        Some(match kind {
            Some("error") => Self::error(message),
            _ => Self::ok(message),
        })
    }

    fn kind_tag(&self) -> &'static str {
        match self.kind {
            NoticeKind::Ok => "ok",
            NoticeKind::Error => "error",
        }
    }

    /// Query-string fragment carried across a redirect.
    pub fn to_query(&self) -> String {
        format!(
            "notice={}&kind={}",
            urlencoding::encode(&self.message),
            self.kind_tag()
        )
    }

    fn render(&self) -> String {
        format!(
            r#"<div class="status" id="status" data-type="{}" role="status">{}</div>"#,
            self.kind_tag(),
            escape_html(&self.message)
        )
    }
}

pub enum DashboardBody<'a> {
    Calendar {
        grid: &'a MonthGrid,
        habit_count: usize,
    },
    Habits {
        habits: &'a [Habit],
    },
    Statistics {
        stats: &'a StatsResponse,
    },
}

impl DashboardBody<'_> {
    fn tab(&self) -> Tab {
        match self {
            Self::Calendar { .. } => Tab::Calendar,
            Self::Habits { .. } => Tab::Habits,
            Self::Statistics { .. } => Tab::Statistics,
        }
    }
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn render_landing(notice: Option<&Notice>, locale: Locale) -> String {
    let t = locale.texts();
    let features: String = t
        .features
        .iter()
        .map(|(title, text)| {
            format!(
                r#"<div class="stat"><span class="value">{title}</span><span>{text}</span></div>"#
            )
        })
        .collect();
    let research: String = RESEARCH
        .iter()
        .zip(t.research_labels)
        .map(|((value, source), label)| {
            format!(
                r#"<div class="stat"><span class="value net">{value}</span><span class="label">{label}</span><span class="source">{source}</span></div>"#
            )
        })
        .collect();

    let body = format!(
        r##"<main class="shell">
  {notice}
  <section class="card hero">
    <span class="badge">{badge}</span>
    <h1>{title}</h1>
    <p>{text}</p>
    <a class="btn-primary cta" href="#auth">{cta}</a>
  </section>

  <section class="card">
    <h2>{features_heading}</h2>
    <div class="grid-4" style="margin-top: 20px">{features}</div>
  </section>

  <section class="card">
    <h2>{research_heading}</h2>
    <p class="subtitle">{research_subtitle}</p>
    <div class="grid-4" style="margin-top: 20px">{research}</div>
  </section>

  <section class="card" id="auth">
    <h2>{auth_heading}</h2>
    <p class="subtitle">{auth_subtitle}</p>
    <div class="auth" style="margin-top: 20px">
      <form method="post" action="/auth/login">
        <h3>{login_heading}</h3>
        <label for="login-email">{email}</label>
        <input id="login-email" name="email" type="email" required autocomplete="email" />
        <label for="login-password">{password}</label>
        <input id="login-password" name="password" type="password" required autocomplete="current-password" />
        <button class="btn-primary" type="submit">{log_in}</button>
      </form>
      <form method="post" action="/auth/register">
        <h3>{register_heading}</h3>
        <label for="register-email">{email}</label>
        <input id="register-email" name="email" type="email" required autocomplete="email" />
        <label for="register-password">{password}</label>
        <input id="register-password" name="password" type="password" required autocomplete="new-password" />
        <label for="register-confirm">{confirm_password}</label>
        <input id="register-confirm" name="confirm_password" type="password" required autocomplete="new-password" />
        <button class="btn-primary" type="submit">{register}</button>
      </form>
    </div>
  </section>

  <footer>{app_name}</footer>
</main>"##,
        notice = notice.map(Notice::render).unwrap_or_default(),
        badge = t.hero_badge,
        title = t.hero_title,
        text = t.hero_text,
        cta = t.hero_cta,
        features_heading = t.features_heading,
        research_heading = t.research_heading,
        research_subtitle = t.research_subtitle,
        auth_heading = t.auth_heading,
        auth_subtitle = t.auth_subtitle,
        login_heading = t.login_heading,
        register_heading = t.register_heading,
        email = t.email,
        password = t.password,
        confirm_password = t.confirm_password,
        log_in = t.log_in,
        register = t.register,
        app_name = t.app_name,
    );
    render_page(t.app_name, locale, &body, NOTICE_SCRIPT)
}

pub fn render_not_found(locale: Locale) -> String {
    let t = locale.texts();
    let body = format!(
        r#"<main class="shell">
  <section class="card hero">
    <h1>404</h1>
    <p>{message}.</p>
    <a class="btn-primary cta" href="/">{back}</a>
  </section>
</main>"#,
        message = t.not_found_title,
        back = t.back_home,
    );
    render_page(t.not_found_title, locale, &body, "")
}

pub fn render_dashboard(
    body: DashboardBody<'_>,
    notice: Option<&Notice>,
    locale: Locale,
) -> String {
    let t = locale.texts();
    let active = body.tab();
    let tabs: String = [Tab::Calendar, Tab::Habits, Tab::Statistics]
        .into_iter()
        .map(|tab| {
            format!(
                r#"<a class="{class}" href="/dashboard?tab={slug}" role="tab" aria-selected="{selected}">{title}</a>"#,
                class = if tab == active { "tab active" } else { "tab" },
                slug = tab.slug(),
                selected = tab == active,
                title = tab.title(t),
            )
        })
        .collect();

    let (content, script) = match body {
        DashboardBody::Calendar { grid, habit_count } => {
            (render_calendar(grid, habit_count, t), "")
        }
        DashboardBody::Habits { habits } => (render_habits(habits, t), ""),
        DashboardBody::Statistics { stats } => (render_statistics(stats, t), STATS_SCRIPT),
    };

    let page = format!(
        r#"<main class="shell">
  <header class="card topbar">
    <div>
      <h1>{app_name}</h1>
      <p class="subtitle">{tagline}</p>
    </div>
    <form method="post" action="/auth/logout">
      <button class="btn-ghost" type="submit">{log_out}</button>
    </form>
  </header>
  <nav class="tabs" role="tablist">{tabs}</nav>
  {notice}
  <div class="card">{content}</div>
</main>"#,
        app_name = t.app_name,
        tagline = t.tagline,
        log_out = t.log_out,
        notice = notice.map(Notice::render).unwrap_or_default(),
    );
    let script = format!("{NOTICE_SCRIPT}{script}");
    render_page(t.dashboard_title, locale, &page, &script)
}

fn render_page(title: &str, locale: Locale, body: &str, script: &str) -> String {
    PAGE_HTML
        .replace("{{LANG}}", locale.tag())
        .replace("{{TITLE}}", &escape_html(title))
        .replace("{{STYLE}}", PAGE_STYLE)
        .replace("{{BODY}}", body)
        .replace("{{SCRIPT}}", script)
}

fn render_calendar(grid: &MonthGrid, habit_count: usize, t: &Texts) -> String {
    let mut html = format!(
        r#"<section class="tab-panel">
      <div class="panel-header">
        <div>
          <h2>{heading}</h2>
          <p class="subtitle">{subtitle}</p>
        </div>
        <nav class="month-nav">
          <a class="nav-btn" href="/dashboard?tab=calendar&year={py}&month={pm}" aria-label="{previous}">&lsaquo;</a>
          <span class="month-title">{title}</span>
          <a class="nav-btn" href="/dashboard?tab=calendar&year={ny}&month={nm}" aria-label="{next}">&rsaquo;</a>
        </nav>
      </div>"#,
        heading = t.calendar_heading,
        subtitle = t.calendar_subtitle,
        py = grid.previous.year,
        pm = grid.previous.month,
        ny = grid.next.year,
        nm = grid.next.month,
        previous = escape_html(t.previous_month),
        next = escape_html(t.next_month),
        title = escape_html(&grid.title),
    );

    if habit_count == 0 {
        html.push_str(&format!(
            r#"
      <div class="empty">
        <h3>{heading}</h3>
        <p>{text} <a href="/dashboard?tab=habits">{habits}</a></p>
      </div>
    </section>"#,
            heading = t.calendar_empty_heading,
            text = t.calendar_empty_text,
            habits = t.tab_habits,
        ));
        return html;
    }

    html.push_str(r#"<div class="calendar-card"><div class="calendar">"#);
    for name in &grid.weekdays {
        html.push_str(&format!(r#"<div class="weekday">{}</div>"#, escape_html(name)));
    }

    for cell in &grid.cells {
        let day = match cell {
            CalendarCell::Blank => {
                html.push_str(r#"<div class="cell blank"></div>"#);
                continue;
            }
            CalendarCell::Day(day) => day,
        };
        let class = if day.is_today { "cell day today" } else { "cell day" };
        html.push_str(&format!(
            r#"<div class="{class}"><span class="day-number">{}</span>"#,
            day.day
        ));
        for mark in &day.habits {
            html.push_str(&format!(
                r#"<form method="post" action="/calendar/toggle">
              <input type="hidden" name="habit_id" value="{id}" />
              <input type="hidden" name="date" value="{date}" />
              <input type="hidden" name="year" value="{year}" />
              <input type="hidden" name="month" value="{month}" />
              <button class="{state}" type="submit" title="{name}" aria-pressed="{done}">{label}</button>
            </form>"#,
                id = escape_html(&mark.habit_id),
                date = day.date,
                year = grid.year,
                month = grid.month,
                state = if mark.done { "mark done" } else { "mark" },
                name = escape_html(&mark.name),
                done = mark.done,
                label = escape_html(&mark.label),
            ));
        }
        html.push_str("</div>");
    }

    html.push_str(&format!(
        r#"</div>
        <div class="legend">
          <span><i class="swatch done"></i>{done}</span>
          <span><i class="swatch"></i>{not_done}</span>
        </div>
      </div>
    </section>"#,
        done = t.done,
        not_done = t.not_done,
    ));
    html
}

fn render_habits(habits: &[Habit], t: &Texts) -> String {
    let mut html = format!(
        r#"<section class="tab-panel">
      <div class="panel-header">
        <div>
          <h2>{heading}</h2>
          <p class="subtitle">{subtitle}</p>
        </div>
      </div>
      <form class="new-habit" method="post" action="/habits">
        <label for="habit-name">{new_habit}</label>
        <input id="habit-name" name="name" type="text" required maxlength="120" placeholder="{placeholder}" />
        <button class="btn-primary" type="submit">{add}</button>
      </form>"#,
        heading = t.habits_heading,
        subtitle = t.habits_subtitle,
        new_habit = t.new_habit,
        placeholder = escape_html(t.new_habit_placeholder),
        add = t.add_habit,
    );

    if habits.is_empty() {
        html.push_str(&format!(
            r#"
      <div class="empty">
        <h3>{heading}</h3>
        <p>{text}</p>
      </div>
    </section>"#,
            heading = t.habits_empty_heading,
            text = t.habits_empty_text,
        ));
        return html;
    }

    html.push_str(r#"<ul class="habit-list">"#);
    for habit in habits {
        let total = habit.total_checks();
        let completed = habit.completed_checks();
        html.push_str(&format!(
            r#"<li class="habit">
          <div class="habit-info">
            <span class="habit-name">{name}</span>
            <span class="habit-meta">{completed} {of} {total} {done} &middot; {rate}%</span>
            <div class="progress"><div class="progress-fill" style="width: {rate}%"></div></div>
          </div>
          <form method="post" action="/habits/{id}/delete" onsubmit="return confirm('{confirm}');">
            <button class="btn-danger" type="submit">{delete}</button>
          </form>
        </li>"#,
            name = escape_html(&habit.name),
            of = t.of,
            done = t.checkins_done,
            rate = completion_rate(completed, total),
            id = urlencoding::encode(&habit.id),
            confirm = escape_html(t.confirm_delete),
            delete = t.delete,
        ));
    }
    html.push_str("</ul></section>");
    html
}

fn render_statistics(stats: &StatsResponse, t: &Texts) -> String {
    let overview = &stats.overview;
    let mut html = format!(
        r#"<section class="tab-panel">
      <div class="panel-header">
        <div>
          <h2>{heading}</h2>
          <p class="subtitle">{subtitle}</p>
        </div>
      </div>"#,
        heading = t.stats_heading,
        subtitle = t.stats_subtitle,
    );

    if overview.total_habits == 0 {
        html.push_str(&format!(
            r#"
      <div class="empty">
        <h3>{heading}</h3>
        <p>{text}</p>
      </div>
    </section>"#,
            heading = t.stats_empty_heading,
            text = t.stats_empty_text,
        ));
        return html;
    }

    html.push_str(&format!(
        r#"<div class="panel">
        <div class="stat"><span class="label">{active_label}</span><span class="value">{habits}</span></div>
        <div class="stat"><span class="label">{rate_label}</span><span class="value">{rate}%</span></div>
        <div class="stat"><span class="label">{streak_label}</span><span class="value net">{streak} {days}</span></div>
        <div class="stat"><span class="label">{completed_label}</span><span class="value">{completed}</span></div>
      </div>
      <div class="chart-grid-2" data-empty="{empty}">
        <div class="chart-card">
          <h3>{weekly}</h3>
          <svg id="weekly-chart" viewBox="0 0 600 260" aria-label="{weekly}" role="img"></svg>
        </div>
        <div class="chart-card">
          <h3>{trend}</h3>
          <svg id="trend-chart" viewBox="0 0 600 260" aria-label="{trend}" role="img"></svg>
        </div>
      </div>
      <div class="chart-grid-2">
        <div class="chart-card">
          <h3>{performance}</h3>
          <ul class="performance">"#,
        active_label = t.active_habits,
        habits = overview.total_habits,
        rate_label = t.completion_rate,
        rate = overview.completion_rate,
        streak_label = t.current_streak,
        streak = overview.current_streak,
        days = t.days,
        completed_label = t.completed_checkins,
        completed = overview.completed_checks,
        empty = escape_html(t.no_chart_data),
        weekly = escape_html(t.weekly_heading),
        trend = escape_html(t.trend_heading),
        performance = t.performance_heading,
    ));

    for item in &stats.performance {
        html.push_str(&format!(
            r#"<li>
            <span class="perf-name">{name}</span>
            <div class="progress"><div class="progress-fill" style="width: {rate}%"></div></div>
            <span class="perf-meta">{rate}% &middot; {completed}/{total}</span>
          </li>"#,
            name = escape_html(&item.name),
            rate = item.rate,
            completed = item.completed_checks,
            total = item.total_checks,
        ));
    }

    html.push_str(&format!(
        r#"</ul>
        </div>
        <div class="chart-card">
          <h3>{heading}</h3>
          <svg id="distribution-chart" viewBox="0 0 260 260" aria-label="{label}" role="img" data-colors="{colors}"></svg>
          <ul class="distribution">"#,
        heading = t.distribution_heading,
        label = escape_html(t.distribution_heading),
        colors = SLICE_COLORS.join(","),
    ));

    // Only slices with completions are drawn; the legend follows the same order.
    let slices = stats.distribution.iter().filter(|slice| slice.completed > 0);
    for (index, slice) in slices.enumerate() {
        html.push_str(&format!(
            r#"<li><i class="swatch" style="background: {color}"></i><span class="perf-name">{name}</span><span class="perf-meta">{share}% &middot; {completed}</span></li>"#,
            color = SLICE_COLORS[index % SLICE_COLORS.len()],
            name = escape_html(&slice.name),
            share = slice.share,
            completed = slice.completed,
        ));
    }

    html.push_str("</ul></div></div></section>");
    html
}

const PAGE_HTML: &str = r#"<!DOCTYPE html>
<html lang="{{LANG}}">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}}</title>
  <style>{{STYLE}}</style>
</head>
<body>
{{BODY}}
<script>{{SCRIPT}}</script>
</body>
</html>
"#;

const PAGE_STYLE: &str = r#"
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f1eefb;
      --bg-2: #d9ccfb;
      --ink: #24212e;
      --muted: #6d6779;
      --accent: #8b5cf6;
      --accent-2: #3b2f63;
      --danger: #c63b2b;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(59, 47, 99, 0.16);
    }

    * { box-sizing: border-box; }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #efe6ff 60%, #f7f4fd 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    a { color: var(--accent); }

    h1, h2, h3 { font-family: "Fraunces", "Georgia", serif; font-weight: 600; margin: 0; }

    .subtitle { margin: 6px 0 0; color: var(--muted); }

    .shell { width: min(1100px, 100%); margin: 0 auto; padding: 28px 18px 48px; display: grid; gap: 24px; }

    .card {
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 32px;
      animation: rise 600ms ease;
    }

    .hero { text-align: center; padding: 56px 32px; }
    .hero h1 { font-size: clamp(2.2rem, 5vw, 3.6rem); }
    .hero .badge {
      display: inline-block; margin-bottom: 16px; padding: 6px 14px; border-radius: 999px;
      background: rgba(139, 92, 246, 0.12); color: var(--accent-2); font-weight: 600; font-size: 0.85rem;
    }
    .hero p { max-width: 640px; margin: 16px auto 0; color: var(--muted); font-size: 1.1rem; }
    .hero .cta { margin-top: 28px; display: inline-flex; }

    .grid-4 { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 16px; }

    .panel { display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 16px; }

    .stat {
      background: white; border-radius: 18px; padding: 18px;
      border: 1px solid rgba(59, 47, 99, 0.08); display: grid; gap: 8px;
    }
    .stat .label { font-size: 0.85rem; text-transform: uppercase; letter-spacing: 0.12em; color: #8b857d; }
    .stat .value { font-size: 1.7rem; font-weight: 600; color: var(--accent-2); }
    .stat .value.net { color: var(--accent); }
    .stat .source { font-size: 0.8rem; color: var(--muted); }

    .auth { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 24px; }
    .auth form, .new-habit { display: grid; gap: 10px; }
    label { font-size: 0.9rem; font-weight: 600; color: var(--accent-2); }
    input[type="text"], input[type="email"], input[type="password"] {
      border: 1px solid rgba(59, 47, 99, 0.18); border-radius: 14px; padding: 12px 14px;
      font: inherit; background: white;
    }

    button, .btn-primary {
      appearance: none; border: none; border-radius: 999px; padding: 12px 20px;
      font: inherit; font-weight: 600; cursor: pointer; text-decoration: none;
      transition: transform 150ms ease, box-shadow 150ms ease;
      display: inline-flex; align-items: center; justify-content: center; gap: 10px;
    }
    button:active { transform: scale(0.98); }
    .btn-primary { background: var(--accent); color: white; box-shadow: 0 10px 24px rgba(139, 92, 246, 0.3); }
    .btn-ghost { background: white; color: var(--accent-2); border: 1px solid rgba(59, 47, 99, 0.18); }
    .btn-danger { background: transparent; color: var(--danger); border: 1px solid rgba(198, 59, 43, 0.3); }

    .topbar { display: flex; justify-content: space-between; align-items: center; gap: 16px; flex-wrap: wrap; }

    .tabs {
      display: flex; gap: 6px; padding: 6px; width: fit-content; margin: 0 auto;
      background: rgba(59, 47, 99, 0.08); border-radius: 999px;
    }
    .tab {
      border-radius: 999px; padding: 8px 18px; font-size: 0.95rem; font-weight: 600;
      color: #6b645d; text-decoration: none;
    }
    .tab.active { background: white; color: var(--accent-2); box-shadow: 0 8px 16px rgba(59, 47, 99, 0.12); }

    .tab-panel { display: grid; gap: 20px; }
    .panel-header { display: flex; flex-wrap: wrap; align-items: center; justify-content: space-between; gap: 16px; }

    .month-nav { display: flex; align-items: center; gap: 10px; }
    .month-title { min-width: 180px; text-align: center; font-weight: 600; font-size: 1.1rem; }
    .nav-btn {
      display: inline-grid; place-items: center; width: 36px; height: 36px; border-radius: 12px;
      background: white; border: 1px solid rgba(59, 47, 99, 0.15); text-decoration: none; font-size: 1.3rem;
    }

    .calendar { display: grid; grid-template-columns: repeat(7, 1fr); gap: 8px; }
    .weekday { text-align: center; font-size: 0.85rem; font-weight: 600; color: var(--muted); padding: 6px; }
    .cell { min-height: 110px; border-radius: 14px; padding: 6px; display: grid; gap: 4px; align-content: start; }
    .cell.day { background: white; border: 1px solid rgba(59, 47, 99, 0.08); }
    .cell.today { border-color: var(--accent); background: rgba(139, 92, 246, 0.08); }
    .day-number { text-align: center; font-size: 0.85rem; font-weight: 600; }
    .mark {
      width: 100%; padding: 4px 6px; border-radius: 8px; font-size: 0.72rem; font-weight: 500;
      background: rgba(59, 47, 99, 0.07); color: var(--muted);
    }
    .mark.done { background: linear-gradient(135deg, var(--accent), #a855f7); color: white; }
    .legend { display: flex; gap: 18px; margin-top: 18px; font-size: 0.8rem; color: var(--muted); }
    .swatch { display: inline-block; width: 14px; height: 14px; border-radius: 4px; margin-right: 6px; vertical-align: middle; background: rgba(59, 47, 99, 0.12); }
    .swatch.done { background: var(--accent); }

    .habit-list, .performance, .distribution { list-style: none; margin: 0; padding: 0; display: grid; gap: 12px; }
    .distribution li { display: flex; align-items: center; gap: 10px; }
    .distribution .perf-name { flex: 1; }
    .habit {
      display: flex; justify-content: space-between; align-items: center; gap: 16px;
      background: white; border-radius: 18px; padding: 16px 18px; border: 1px solid rgba(59, 47, 99, 0.08);
    }
    .habit-info { display: grid; gap: 6px; flex: 1; }
    .habit-name { font-weight: 600; font-size: 1.05rem; }
    .habit-meta, .perf-meta { font-size: 0.85rem; color: var(--muted); }
    .performance li { display: grid; grid-template-columns: 160px 1fr 110px; gap: 12px; align-items: center; }
    .progress { height: 8px; border-radius: 999px; background: rgba(59, 47, 99, 0.08); overflow: hidden; }
    .progress-fill { height: 100%; background: var(--accent); border-radius: 999px; }

    .chart-grid-2 { display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 16px; }
    .chart-card { background: white; border-radius: 20px; padding: 16px; border: 1px solid rgba(59, 47, 99, 0.08); display: grid; gap: 10px; }
    .chart-card svg { width: 100%; height: 240px; display: block; }
    .chart-card text { font-family: "Space Grotesk", "Trebuchet MS", sans-serif; }
    .chart-line { fill: none; stroke: var(--accent); stroke-width: 3; }
    .chart-point { fill: white; stroke: var(--accent); stroke-width: 2; }
    .chart-bar { fill: var(--accent); }
    .chart-grid { stroke: rgba(59, 47, 99, 0.12); }
    .chart-label { fill: #7a746d; font-size: 11px; }

    .empty { text-align: center; padding: 48px 16px; color: var(--muted); }
    .empty h3 { color: var(--ink); margin-bottom: 8px; }

    .status { font-size: 0.95rem; min-height: 1.2em; padding: 12px 16px; border-radius: 14px; transition: opacity 400ms ease; }
    .status[data-type="error"] { color: var(--danger); background: rgba(198, 59, 43, 0.08); }
    .status[data-type="ok"] { color: #2d7a4b; background: rgba(45, 122, 75, 0.08); }
    .status.fade { opacity: 0; }

    footer { text-align: center; color: var(--muted); font-size: 0.85rem; }

    @keyframes rise {
      from { opacity: 0; transform: translateY(18px); }
      to { opacity: 1; transform: translateY(0); }
    }

    @media (max-width: 700px) {
      .card { padding: 24px 18px; }
      .cell { min-height: 80px; }
      .performance li { grid-template-columns: 1fr; }
    }
"#;


const NOTICE_SCRIPT: &str = r#"
    (() => {
      const statusEl = document.getElementById('status');
      if (!statusEl) {
        return;
      }
      const url = new URL(window.location.href);
      url.searchParams.delete('notice');
      url.searchParams.delete('kind');
      window.history.replaceState(null, '', url.pathname + url.search);
      setTimeout(() => statusEl.classList.add('fade'), 4000);
      setTimeout(() => statusEl.remove(), 4500);
    })();
"#;

const STATS_SCRIPT: &str = r#"
    (() => {
      const weeklyEl = document.getElementById('weekly-chart');
      const trendEl = document.getElementById('trend-chart');
      const pieEl = document.getElementById('distribution-chart');
      if (!weeklyEl || !trendEl || !pieEl) {
        return;
      }
      const emptyHost = document.querySelector('[data-empty]');
      const emptyText = emptyHost ? emptyHost.dataset.empty : '';
      const emptyChart = `<text class="chart-label" x="50%" y="50%" text-anchor="middle">${emptyText}</text>`;

      const width = 600;
      const height = 260;
      const paddingX = 40;
      const paddingY = 34;
      const top = 20;

      const scale = (points) => {
        const max = Math.max(1, ...points.map((point) => point.value));
        const scaleY = (height - top - paddingY) / max;
        const y = (value) => height - paddingY - value * scaleY;
        let grid = '';
        const ticks = Math.min(4, max);
        for (let i = 0; i <= ticks; i += 1) {
          const value = Math.round((max * i) / ticks);
          grid += `<line class="chart-grid" x1="${paddingX}" y1="${y(value)}" x2="${width - paddingX}" y2="${y(value)}" />`;
          grid += `<text class="chart-label" x="${paddingX - 10}" y="${y(value) + 4}" text-anchor="end">${value}</text>`;
        }
        return { y, grid };
      };

      const renderBars = (el, points) => {
        if (!points.length) {
          el.innerHTML = emptyChart;
          return;
        }
        const { y, grid } = scale(points);
        const slot = (width - paddingX * 2) / points.length;
        const barWidth = Math.max(8, slot * 0.55);
        const bars = points
          .map((point, index) => {
            const x = paddingX + index * slot + (slot - barWidth) / 2;
            const barTop = y(point.value);
            return `<rect class="chart-bar" rx="6" x="${x.toFixed(2)}" y="${barTop.toFixed(2)}" width="${barWidth.toFixed(2)}" height="${(height - paddingY - barTop).toFixed(2)}"><title>${point.title}</title></rect>` +
              `<text class="chart-label" x="${(x + barWidth / 2).toFixed(2)}" y="${height - paddingY + 18}" text-anchor="middle">${point.label}</text>`;
          })
          .join('');
        el.innerHTML = grid + bars;
      };

      const renderLine = (el, points) => {
        if (!points.length) {
          el.innerHTML = emptyChart;
          return;
        }
        const { y, grid } = scale(points);
        const xStep = points.length > 1 ? (width - paddingX * 2) / (points.length - 1) : 0;
        const x = (index) => paddingX + index * xStep;
        const path = points
          .map((point, index) => `${index === 0 ? 'M' : 'L'} ${x(index).toFixed(2)} ${y(point.value).toFixed(2)}`)
          .join(' ');
        const labelEvery = points.length > 8 ? 5 : 1;
        const labels = points
          .map((point, index) => index % labelEvery === 0
            ? `<text class="chart-label" x="${x(index)}" y="${height - paddingY + 18}" text-anchor="middle">${point.label}</text>`
            : '')
          .join('');
        const circles = points
          .map((point, index) => `<circle class="chart-point" cx="${x(index)}" cy="${y(point.value)}" r="3"><title>${point.title}</title></circle>`)
          .join('');
        el.innerHTML = `${grid}<path class="chart-line" d="${path}" />${circles}${labels}`;
      };

      const renderPie = (el, slices) => {
        const total = slices.reduce((sum, slice) => sum + slice.completed, 0);
        if (!total) {
          el.innerHTML = emptyChart;
          return;
        }
        const colors = (el.dataset.colors || '#8b5cf6').split(',');
        const cx = 130;
        const cy = 130;
        const r = 110;
        if (slices.length === 1) {
          el.innerHTML = `<circle cx="${cx}" cy="${cy}" r="${r}" fill="${colors[0]}"><title>${slices[0].name}</title></circle>`;
          return;
        }
        let angle = -Math.PI / 2;
        el.innerHTML = slices
          .map((slice, index) => {
            const sweep = (slice.completed / total) * Math.PI * 2;
            const start = [cx + r * Math.cos(angle), cy + r * Math.sin(angle)];
            angle += sweep;
            const end = [cx + r * Math.cos(angle), cy + r * Math.sin(angle)];
            const large = sweep > Math.PI ? 1 : 0;
            const color = colors[index % colors.length];
            return `<path d="M ${cx} ${cy} L ${start[0].toFixed(2)} ${start[1].toFixed(2)} A ${r} ${r} 0 ${large} 1 ${end[0].toFixed(2)} ${end[1].toFixed(2)} Z" fill="${color}"><title>${slice.name}: ${slice.share}%</title></path>`;
          })
          .join('');
      };

      fetch('/api/stats', { credentials: 'same-origin' })
        .then((res) => {
          if (!res.ok) {
            throw new Error(`stats request failed: ${res.status}`);
          }
          return res.json();
        })
        .then((stats) => {
          renderBars(weeklyEl, stats.weekly.map((point) => ({
            label: point.weekday,
            title: `${point.label}: ${point.completed}`,
            value: point.completed
          })));
          renderLine(trendEl, stats.monthly_trend.map((point) => ({
            label: point.day_of_month,
            title: `${point.date}: ${point.completed}`,
            value: point.completed
          })));
          renderPie(pieEl, stats.distribution.filter((slice) => slice.completed > 0));
        })
        .catch((err) => console.error('Error loading statistics:', err));
    })();
"#;


#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{build_month, MonthCursor};
    use crate::day::CheckDay;
    use crate::models::CheckRecord;
    use crate::stats::build_stats_at;
    use chrono::NaiveDate;

    fn sample_habits() -> Vec<Habit> {
        vec![Habit {
            id: "h1".to_string(),
            name: "<b>Read</b>".to_string(),
            checks: vec![CheckRecord {
                day: CheckDay::from_ymd(2025, 3, 3).unwrap(),
                is_done: true,
            }],
        }]
    }

    #[test]
    fn escape_html_covers_markup_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn notice_round_trips_through_query() {
        let notice = Notice::error("Passwords do not match.");
        let query = notice.to_query();
        assert_eq!(query, "notice=Passwords%20do%20not%20match.&kind=error");
        assert_eq!(
            Notice::from_query(Some("Passwords do not match."), Some("error")),
            Some(notice)
        );
        assert_eq!(Notice::from_query(Some("  "), None), None);
    }

    #[test]
    fn calendar_tab_escapes_names_and_posts_toggle_forms() {
        let habits = sample_habits();
        let today = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        let grid = build_month(MonthCursor::containing(today), &habits, today, Locale::En).unwrap();
        let html = render_dashboard(
            DashboardBody::Calendar {
                grid: &grid,
                habit_count: habits.len(),
            },
            None,
            Locale::En,
        );
        assert!(html.contains("March 2025"));
        assert!(html.contains(r#"action="/calendar/toggle""#));
        assert!(html.contains(r#"name="date" value="2025-03-03""#));
        assert!(html.contains("mark done"));
        assert!(html.contains("&lt;b&gt;Read"));
        assert!(!html.contains("<b>Read</b>"));
    }

    #[test]
    fn statistics_tab_shows_empty_state_without_habits() {
        let stats = build_stats_at(NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(), &[], Locale::En);
        let html = render_dashboard(DashboardBody::Statistics { stats: &stats }, None, Locale::En);
        assert!(html.contains("Nothing to analyse yet"));
        assert!(html.contains(r#"class="tab active" href="/dashboard?tab=statistics""#));
        assert!(!html.contains("distribution-chart"));
    }

    #[test]
    fn statistics_tab_lists_completed_share_per_habit() {
        let mut habits = sample_habits();
        habits.push(Habit {
            id: "h2".to_string(),
            name: "Run".to_string(),
            checks: Vec::new(),
        });
        let stats = build_stats_at(NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(), &habits, Locale::En);
        let html = render_dashboard(DashboardBody::Statistics { stats: &stats }, None, Locale::En);
        assert!(html.contains(r#"id="distribution-chart""#));
        assert!(html.contains("Completed check-ins by habit"));
        assert!(html.contains(r#"<span class="perf-meta">100% &middot; 1</span>"#));
        // Habits without completions get no legend row.
        assert!(!html.contains(r#"<span class="perf-name">Run</span><span class="perf-meta">"#));
        assert!(html.contains(r#"data-empty="No data yet""#));
    }

    #[test]
    fn polish_dashboard_has_no_english_copy() {
        let habits = sample_habits();
        let html = render_dashboard(DashboardBody::Habits { habits: &habits }, None, Locale::Pl);
        assert!(html.contains(r#"<html lang="pl">"#));
        assert!(html.contains("Nawyki"));
        assert!(html.contains("Wyloguj się"));
        assert!(!html.contains("Log out"));
        assert!(!html.contains("check-ins done"));

        let landing = render_landing(None, Locale::Pl);
        assert!(!landing.contains("Build consistency"));
        assert!(!render_not_found(Locale::Pl).contains("Page not found"));
    }

    #[test]
    fn landing_page_renders_notice() {
        let html = render_landing(Some(&Notice::ok("Account created")), Locale::Pl);
        assert!(html.contains(r#"<html lang="pl">"#));
        assert!(html.contains(r#"data-type="ok""#));
        assert!(html.contains(r#"action="/auth/register""#));
    }
}
