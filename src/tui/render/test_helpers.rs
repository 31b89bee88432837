use chrono::{Duration, Local, NaiveDate, TimeZone};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::{Category, Config, NewTask, Priority};
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// The fixed "today" every render test runs against
pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Render the whole screen at the standard test size
pub fn render_app(app: &mut App) -> String {
    render_to_string(TERM_W, TERM_H, |frame, _area| {
        crate::tui::render::render(frame, app);
    })
}

/// Build an App holding `drafts`, added oldest first with distinct
/// timestamps, and "today" pinned to `test_today()`.
pub fn app_with_tasks(drafts: &[NewTask]) -> App {
    let mut app = App::new(&Config::default());
    app.today = test_today();
    let base = Local.with_ymd_and_hms(2026, 10, 18, 9, 0, 0).unwrap();
    for (i, draft) in drafts.iter().enumerate() {
        app.store
            .add_task_at(draft.clone(), base + Duration::seconds(i as i64));
    }
    app
}

/// A draft due `days` after `test_today()`
pub fn due_in(title: &str, priority: Priority, days: i64) -> NewTask {
    NewTask {
        priority,
        due_date: Some(test_today() + Duration::days(days)),
        ..NewTask::titled(title)
    }
}

/// Three pending tasks covering every category label and urgency band
pub fn sample_drafts() -> Vec<NewTask> {
    vec![
        NewTask {
            category: Category::Shopping,
            ..NewTask::titled("Buy milk")
        },
        NewTask {
            description: "quarterly numbers".into(),
            ..due_in("Write report", Priority::High, 2)
        },
        NewTask {
            category: Category::Personal,
            ..due_in("Renew passport", Priority::Low, 10)
        },
    ]
}
