//! Pure formatting helpers for the countdown display

use crate::state::Timer;

const FILLED_CELL: char = '█';
const EMPTY_CELL: char = '░';

/// Format a second count as `MM:SS`.
///
/// Minutes keep growing past 59 (`5415` becomes `90:15`); negative input
/// renders as `00:00`.
pub fn format_time(seconds: i64) -> String {
    let seconds = seconds.max(0);
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Build a bar `width` cells wide with floor(percentage / 100 * width) filled
pub fn progress_bar(percentage: f64, width: usize) -> String {
    let filled = (percentage / 100.0 * width as f64).floor();
    // `as` saturates, so NaN and negatives land on 0
    let filled = (filled as usize).min(width);

    let mut bar = String::with_capacity(width * FILLED_CELL.len_utf8());
    bar.extend(std::iter::repeat(FILLED_CELL).take(filled));
    bar.extend(std::iter::repeat(EMPTY_CELL).take(width - filled));
    bar
}

/// Describe a total duration the way the header shows it
pub fn describe_total(total_seconds: i64) -> String {
    if total_seconds < 60 {
        format!("{} seconds", total_seconds)
    } else {
        format!("{:.1} minutes", total_seconds as f64 / 60.0)
    }
}

/// First line shown when a timer starts, e.g. `🍅 Pomodoro Timer: 45.0 minutes`
pub fn header_line(timer: &Timer) -> String {
    let mode = timer.mode();
    format!(
        "{} {}: {}",
        mode.emoji(),
        mode.title(),
        describe_total(timer.total_seconds())
    )
}

/// The line redrawn on every tick
pub fn status_line(timer: &Timer, width: usize) -> String {
    let percentage = timer.percentage();
    let time = format_time(timer.remaining_seconds());
    let bar = progress_bar(percentage, width);

    if timer.is_paused() {
        format!("⏸️  {} {} {:.1}% (PAUSED)", time, bar, percentage)
    } else {
        format!("⏰ {} {} {:.1}%", time, bar, percentage)
    }
}

pub fn completion_line(timer: &Timer) -> String {
    format!("🎉 {} completed!", timer.mode().session_name())
}

pub fn cancelled_line(timer: &Timer) -> String {
    format!(
        "⏹️  {} stopped with {} remaining",
        timer.mode().session_name(),
        format_time(timer.remaining_seconds())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Mode;

    #[test]
    fn format_time_pads_and_does_not_wrap_hours() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(30), "00:30");
        assert_eq!(format_time(5 * 60), "05:00");
        assert_eq!(format_time(3 * 60 + 45), "03:45");
        assert_eq!(format_time(25 * 60 + 10), "25:10");
        assert_eq!(format_time(2 * 60 + 5), "02:05");
        assert_eq!(format_time(5415), "90:15");
    }

    #[test]
    fn format_time_clamps_negative() {
        assert_eq!(format_time(-42), "00:00");
    }

    #[test]
    fn progress_bar_fill_counts() {
        let cases: &[(f64, usize, &str)] = &[
            (0.0, 10, "░░░░░░░░░░"),
            (100.0, 10, "██████████"),
            (50.0, 10, "█████░░░░░"),
            (25.0, 20, "█████░░░░░░░░░░░░░░░"),
            (75.0, 8, "██████░░"),
            (60.0, 1, "░"),
            (0.0, 1, "░"),
            (99.9, 1, "░"),
        ];
        for &(percentage, width, expected) in cases {
            assert_eq!(
                progress_bar(percentage, width),
                expected,
                "percentage {percentage} width {width}"
            );
        }
    }

    #[test]
    fn progress_bar_truncates_fractional_cells() {
        assert_eq!(progress_bar(33.3, 9), "██░░░░░░░");
        assert_eq!(progress_bar(66.7, 9), "██████░░░");
    }

    #[test]
    fn progress_bar_clamps_out_of_range() {
        assert_eq!(progress_bar(150.0, 4), "████");
        assert_eq!(progress_bar(-10.0, 4), "░░░░");
        assert_eq!(progress_bar(50.0, 0), "");
    }

    #[test]
    fn formatting_is_pure() {
        assert_eq!(format_time(754), format_time(754));
        assert_eq!(progress_bar(42.0, 30), progress_bar(42.0, 30));
    }

    #[test]
    fn header_uses_seconds_under_a_minute() {
        let t = Timer::new(Mode::Work, 30, "30s").unwrap();
        assert_eq!(header_line(&t), "🍅 Pomodoro Timer: 30 seconds");

        let t = Timer::new(Mode::Rest, 90, "90s").unwrap();
        assert_eq!(header_line(&t), "☕ Break Timer: 1.5 minutes");
    }

    #[test]
    fn status_line_shows_time_bar_and_percentage() {
        let mut t = Timer::new(Mode::Work, 4, "4s").unwrap();
        t.tick();
        assert_eq!(status_line(&t, 4), "⏰ 00:03 █░░░ 25.0%");

        t.toggle_pause();
        assert_eq!(status_line(&t, 4), "⏸️  00:03 █░░░ 25.0% (PAUSED)");
    }

    #[test]
    fn completion_text_per_mode() {
        let work = Timer::new(Mode::Work, 0, "0").unwrap();
        let rest = Timer::new(Mode::Rest, 0, "0").unwrap();
        assert_eq!(completion_line(&work), "🎉 Pomodoro completed!");
        assert_eq!(completion_line(&rest), "🎉 Break completed!");
    }
}
