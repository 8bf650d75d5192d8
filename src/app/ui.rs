use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Block, Borders, Cell, Chart, Clear, Dataset, GraphType, Paragraph, Row, Table,
        TableState, Wrap,
    },
};

use crate::app::{
    form::{Focus, InputForm},
    present::{ChartSpec, MetricDisplay, Presentation, Results, TableSpec, Tone},
};

pub const PAGE_TITLE: &str = "S&P 500 Stock Price Tracker";

const SIDEBAR_WIDTH: u16 = 30;
const COLUMN_WIDTH: u16 = 14;
// Below this width full dates overlap on the x axis
const NARROW_CHART_WIDTH: u16 = 48;

pub fn render(
    frame: &mut Frame,
    form: &InputForm,
    presentation: Option<&Presentation>,
    table_state: &mut TableState,
    popup_message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(frame.area());

    let title = Paragraph::new(PAGE_TITLE)
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(chunks[1]);

    render_sidebar(frame, form, body[0]);

    match presentation {
        None => {
            let waiting = Paragraph::new("Waiting for data...")
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(waiting, body[1]);
        }
        Some(Presentation::Error(message)) => render_error(frame, message, body[1]),
        Some(Presentation::Results(results)) => {
            render_results(frame, results, table_state, body[1])
        }
    }

    if let Some(message) = popup_message {
        render_popup(frame, message);
    }
}

fn render_sidebar(frame: &mut Frame, form: &InputForm, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let field_block = |title: &'static str, focus: Focus| {
        let border = if *form.focus() == focus {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border)
    };

    let ticker =
        Paragraph::new(form.ticker().as_str()).block(field_block("Stock Ticker", Focus::Ticker));
    frame.render_widget(ticker, chunks[0]);

    let date_style = if form.is_start_date_valid() {
        Style::default()
    } else {
        Style::default().fg(Color::Red)
    };
    let start_date = Paragraph::new(form.start_date_input().as_str())
        .style(date_style)
        .block(field_block("Start Date", Focus::StartDate));
    frame.render_widget(start_date, chunks[1]);

    let interval = Paragraph::new(format!("< {} >", form.interval()))
        .block(field_block("Interval", Focus::Interval));
    frame.render_widget(interval, chunks[2]);

    let refresh_style = if *form.focus() == Focus::Refresh {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    let refresh = Paragraph::new("Refresh Data")
        .style(refresh_style)
        .block(field_block("", Focus::Refresh));
    frame.render_widget(refresh, chunks[3]);

    let help = Paragraph::new(vec![
        Line::from("Tab/Up/Down  move focus"),
        Line::from("Enter        apply"),
        Line::from("Left/Right   interval"),
        Line::from("F5           refresh"),
        Line::from("PgUp/PgDn    scroll table"),
        Line::from("Esc          quit"),
    ])
    .style(Style::default().fg(Color::DarkGray))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[4]);
}

fn render_error(frame: &mut Frame, message: &str, area: Rect) {
    let error = Paragraph::new(message)
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title("Error")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );
    frame.render_widget(error, area);
}

fn render_results(
    frame: &mut Frame,
    results: &Results,
    table_state: &mut TableState,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Percentage(55),
            Constraint::Min(0),
        ])
        .split(area);

    render_metric(frame, results.metric(), chunks[0]);
    render_chart(frame, results.chart(), chunks[1]);
    render_table(frame, results.table(), table_state, chunks[2]);
}

fn render_metric(frame: &mut Frame, metric: &MetricDisplay, area: Rect) {
    let arrow = match metric.tone() {
        Tone::Positive => "▲",
        Tone::Negative => "▼",
    };

    let lines = vec![
        Line::from(Span::styled(
            metric.value().as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} {}", arrow, metric.delta()),
            Style::default().fg(metric.tone().color()),
        )),
    ];

    let widget = Paragraph::new(lines)
        .block(Block::default().title(metric.label().as_str()).borders(Borders::ALL));
    frame.render_widget(widget, area);
}

fn render_chart(frame: &mut Frame, view: &ChartSpec, area: Rect) {
    let date_format = if area.width < NARROW_CHART_WIDTH {
        "%y-%m-%d"
    } else {
        "%Y-%m-%d"
    };

    let x_labels: Vec<Span> = view
        .x_ticks()
        .iter()
        .map(|d| Span::raw(d.format(date_format).to_string()))
        .collect();

    let [y_lower, y_upper] = *view.y_bounds();
    let y_labels: Vec<Span> = [y_lower, (y_lower + y_upper) / 2.0, y_upper]
        .iter()
        .map(|v| Span::raw(format!("{:.2}", v)))
        .collect();
    let y_label_width = y_labels.iter().map(|s| s.width()).max().unwrap_or(0) as u16;

    let datasets = vec![
        Dataset::default()
            .name(view.legend().as_str())
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Blue))
            .data(view.points()),
    ];

    let block = Block::default().title(view.title().as_str()).borders(Borders::ALL);
    let inner = block.inner(area);

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .title(Span::styled(
                    view.x_title().as_str(),
                    Style::default().fg(Color::Gray),
                ))
                .style(Style::default().fg(Color::DarkGray))
                .bounds(*view.x_bounds())
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled(
                    view.y_title().as_str(),
                    Style::default().fg(Color::Gray),
                ))
                .style(Style::default().fg(Color::DarkGray))
                .bounds(*view.y_bounds())
                .labels(y_labels),
        );

    frame.render_widget(chart, area);

    // Chart has no point annotations; write the label into the buffer just
    // above the last point. The plot area is approximated as the inner block
    // minus the y label column and the two x axis rows.
    let annotation = view.annotation();
    let text = annotation.text();
    let text_width = text.chars().count() as u16;

    let plot_left = inner.x + y_label_width + 1;
    let plot_width = inner.width.saturating_sub(y_label_width + 1);
    let plot_height = inner.height.saturating_sub(2);
    if plot_width <= text_width || plot_height < 2 {
        return;
    }

    let [x_lower, x_upper] = *view.x_bounds();
    let x_frac = ((annotation.x() - x_lower) / (x_upper - x_lower)).clamp(0.0, 1.0);
    let y_frac = if (y_upper - y_lower).abs() > f64::EPSILON {
        ((annotation.y() - y_lower) / (y_upper - y_lower)).clamp(0.0, 1.0)
    } else {
        0.5
    };

    let px = plot_left + (x_frac * (plot_width - 1) as f64) as u16;
    let py = inner.y + (plot_height - 1) - (y_frac * (plot_height - 1) as f64) as u16;

    let x = px
        .saturating_sub(text_width.saturating_sub(1))
        .max(plot_left);
    let y = py.saturating_sub(1).max(inner.y);

    let style = Style::default()
        .fg(annotation.tone().color())
        .add_modifier(Modifier::BOLD);
    frame.buffer_mut().set_string(x, y, text, style);
}

fn render_table(
    frame: &mut Frame,
    view: &TableSpec,
    table_state: &mut TableState,
    area: Rect,
) {
    let header_cells = view
        .headers()
        .iter()
        .map(|h| Cell::from(h.as_str()).style(Style::default().fg(Color::Yellow)));
    let header = Row::new(header_cells).height(1);

    let rows = view.rows().iter().map(|cells| {
        Row::new(cells.iter().map(|c| Cell::from(c.as_str()))).height(1)
    });

    let widths = vec![Constraint::Length(COLUMN_WIDTH); view.headers().len()];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().title(view.title().as_str()).borders(Borders::ALL))
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    frame.render_stateful_widget(table, area, table_state);
}

fn render_popup(frame: &mut Frame, message: &str) {
    let area = frame.area();
    let width = u16::try_from(message.chars().count())
        .unwrap_or(u16::MAX)
        .saturating_add(4)
        .min(area.width);
    let height = 3.min(area.height);
    let popup = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );

    let widget = Paragraph::new(message)
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(Clear, popup);
    frame.render_widget(widget, popup);
}
