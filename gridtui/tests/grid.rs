use gridmodel::{CellValue, ColumnDef, SortDirection};
use gridtui::buffer::Buffer;
use gridtui::event::{Key, Position};
use gridtui::geometry::Rect;
use gridtui::theme::Theme;
use gridtui::widgets::Grid;

#[derive(Clone)]
struct Person {
    name: String,
    age: i64,
    email: String,
}

fn columns() -> Vec<ColumnDef<Person>> {
    vec![
        ColumnDef::new("name", "Name", |p: &Person| CellValue::text(p.name.clone())),
        ColumnDef::new("age", "Age", |p: &Person| CellValue::Int(p.age)),
        ColumnDef::new("email", "Email", |p: &Person| {
            CellValue::text(p.email.clone())
        }),
    ]
}

/// 47 people; every seventh one is an Alice.
fn people() -> Vec<Person> {
    (0..47)
        .map(|i| {
            let first = if i % 7 == 0 { "Alice" } else { "Person" };
            Person {
                name: format!("{first} {i:02}"),
                age: 20 + (i * 13) % 40,
                email: format!("{}{i:02}@example.com", first.to_lowercase()),
            }
        })
        .collect()
}

fn grid() -> Grid<Person> {
    Grid::new(people(), columns()).with_page_size(10)
}

#[test]
fn pagination_boundaries() {
    let grid = grid();

    assert_eq!(grid.page_label(), "Page 1 of 5");
    assert!(!grid.can_previous());
    assert!(grid.can_next());

    grid.last_page();
    assert_eq!(grid.page_label(), "Page 5 of 5");
    assert!(grid.can_previous());
    assert!(!grid.can_next());
    assert_eq!(grid.window().page_rows.len(), 7);

    grid.next_page();
    assert_eq!(grid.page_label(), "Page 5 of 5");

    grid.first_page();
    assert!(!grid.can_previous());
}

#[test]
fn filter_commit_narrows_rows() {
    let grid = grid();
    grid.set_global_filter("alice");

    assert_eq!(grid.filtered_count(), 7);
    assert_eq!(grid.total_count(), 47);
    assert!(grid.window().page_rows.len() <= 10);
    assert_eq!(grid.page_label(), "Page 1 of 1");
}

#[test]
fn filter_shrink_clamps_stranded_page() {
    let grid = grid();
    grid.last_page();
    grid.set_global_filter("alice");

    let window = grid.window();
    assert_eq!(window.page_index, 0);
    assert!(!window.can_next());
}

#[test]
fn sort_cycle_restores_original_order() {
    let grid = grid();
    let original = grid.window().page_rows;

    grid.toggle_sort("age");
    assert_eq!(grid.sort_direction("age"), Some(SortDirection::Ascending));
    let ascending = grid.window().page_rows;
    assert_ne!(ascending, original);

    grid.toggle_sort("age");
    assert_eq!(grid.sort_direction("age"), Some(SortDirection::Descending));

    grid.toggle_sort("age");
    assert_eq!(grid.sort_direction("age"), None);
    assert_eq!(grid.window().page_rows, original);
}

#[test]
fn keyboard_navigation() {
    let grid = grid();

    assert!(grid.handle_key(&Key::Right));
    assert_eq!(grid.page_label(), "Page 2 of 5");

    assert!(grid.handle_key(&Key::Left));
    assert_eq!(grid.page_label(), "Page 1 of 5");

    assert!(grid.handle_key(&Key::End));
    assert_eq!(grid.page_label(), "Page 5 of 5");

    assert!(grid.handle_key(&Key::Home));
    assert_eq!(grid.page_label(), "Page 1 of 5");

    // Digit keys toggle sort on the matching column.
    assert!(grid.handle_key(&Key::Char('2')));
    assert_eq!(grid.sort_direction("age"), Some(SortDirection::Ascending));

    // No fourth column, and unrelated keys are ignored.
    assert!(!grid.handle_key(&Key::Char('4')));
    assert!(!grid.handle_key(&Key::Enter));
}

#[test]
fn clones_share_state() {
    let grid = grid();
    let handle = grid.clone();

    handle.set_global_filter("alice");
    assert_eq!(grid.filtered_count(), 7);
}

#[test]
fn header_click_toggles_sort() {
    let grid = grid();
    let mut buffer = Buffer::new(60, 20);
    grid.render(&mut buffer, Rect::new(0, 0, 60, 20), &Theme::default());

    // Column widths are equal shares of 60: the second column starts at 20.
    assert!(grid.handle_click(Position::new(21, 0)));
    assert_eq!(grid.sort_direction("age"), Some(SortDirection::Ascending));

    // A click in the body hits nothing.
    assert!(!grid.handle_click(Position::new(5, 5)));
}

#[test]
fn disabled_control_click_does_not_navigate() {
    let grid = grid();
    let mut buffer = Buffer::new(60, 20);
    let theme = Theme::default();
    grid.render(&mut buffer, Rect::new(0, 0, 60, 20), &theme);

    // "«" sits at the left edge of the footer; on page 1 it is disabled.
    assert!(grid.handle_click(Position::new(1, 19)));
    assert_eq!(grid.page_label(), "Page 1 of 5");

    // "›" is enabled; its position follows « ‹ and the page label.
    grid.render(&mut buffer, Rect::new(0, 0, 60, 20), &theme);
    let footer = buffer.row_text(19);
    // Char position equals cell column here: everything before "›" is narrow.
    let next_x = footer.chars().position(|c| c == '›').unwrap() as u16;
    assert!(grid.handle_click(Position::new(next_x, 19)));
    assert_eq!(grid.page_label(), "Page 2 of 5");
}

#[test]
fn render_shows_header_rows_and_footer() {
    let grid = grid();
    let mut buffer = Buffer::new(60, 13);
    grid.render(&mut buffer, Rect::new(0, 0, 60, 13), &Theme::default());

    let header = buffer.row_text(0);
    assert!(header.contains("Name"));
    assert!(header.contains("Age"));
    assert!(header.contains("Email"));

    // Page size 10 fills rows 1..=10.
    assert!(buffer.row_text(1).contains("Alice 00"));
    assert!(buffer.row_text(10).contains("Person 09"));
    assert_eq!(buffer.row_text(11), "");

    let footer = buffer.row_text(12);
    assert!(footer.contains("Page 1 of 5"));
    assert!(footer.contains("47 rows"));
}

#[test]
fn render_sorted_header_carries_indicator() {
    let grid = grid();
    grid.toggle_sort("name");

    let mut buffer = Buffer::new(60, 13);
    grid.render(&mut buffer, Rect::new(0, 0, 60, 13), &Theme::default());
    assert!(buffer.row_text(0).contains("Name ▲"));
}

#[test]
fn render_empty_filter_result() {
    let grid = grid();
    grid.set_global_filter("zzz");

    let mut buffer = Buffer::new(60, 13);
    grid.render(&mut buffer, Rect::new(0, 0, 60, 13), &Theme::default());

    assert!(buffer.row_text(1).contains("No rows match the filter."));
    let footer = buffer.row_text(12);
    assert!(footer.contains("Page 1 of 1"));
    assert!(footer.contains("0 of 47 rows"));
}
