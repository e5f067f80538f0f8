//! Whole-site rendering with ratatui's test backend.

use assimox::app::Site;
use assimox::config::Config;
use assimox::router::Route;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::path::PathBuf;

fn site(route: Route) -> Site {
    Site::new(Config::default(), PathBuf::from("config.toml"), route).unwrap()
}

fn render(site: &mut Site, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| site.draw(frame).unwrap()).unwrap();
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|c| c.symbol())
        .collect()
}

fn press(site: &mut Site, code: KeyCode) {
    site.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
        .unwrap();
}

#[test]
fn test_every_route_renders_wide_and_compact() {
    for route in Route::ALL {
        let mut site = site(route);
        for (width, height) in [(140, 45), (60, 30)] {
            let text = render(&mut site, width, height);
            assert!(!text.trim().is_empty(), "{} at {}x{}", route, width, height);
        }
    }
}

#[test]
fn test_home_then_services_search() {
    let mut site = site(Route::Home);
    let text = render(&mut site, 130, 40);
    assert!(text.contains("Get Started"));

    press(&mut site, KeyCode::Char('2'));
    assert_eq!(site.route(), Route::Services);
    press(&mut site, KeyCode::Char('/'));
    for c in "dahisar".chars() {
        press(&mut site, KeyCode::Char(c));
    }
    let text = render(&mut site, 130, 40);
    assert!(text.contains("Parmar Airtronics"));
    assert!(!text.contains("Urban Expert Service"));
}

#[test]
fn test_gallery_modal_over_site() {
    let mut site = site(Route::Gallery);
    render(&mut site, 130, 40);
    press(&mut site, KeyCode::Enter);
    let text = render(&mut site, 130, 40);
    assert!(text.contains("1 of 6"));
    press(&mut site, KeyCode::Right);
    let text = render(&mut site, 130, 40);
    assert!(text.contains("2 of 6"));
}

#[test]
fn test_admin_form_renders_with_toast_after_invalid_submit() {
    let mut site = site(Route::Admin);
    press(&mut site, KeyCode::Enter);
    let text = render(&mut site, 130, 40);
    assert!(text.contains("Admin Login"));
    assert!(text.contains("Username is required"));
}
