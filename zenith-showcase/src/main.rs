mod page;

use std::fs::File;
use std::io;

use simplelog::{Config, LevelFilter, WriteLogger};
use zenith::handlers::{HandlerRegistry, ON_ACTIVATE, ON_REMOVE};
use zenith_dom::{apply_focus, find_element, Element, Event, FocusState, Key, Terminal};

use page::Showcase;

fn main() -> io::Result<()> {
    let log_file = File::create("zenith-showcase.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut showcase = Showcase::new().map_err(io::Error::other)?;
    let mut terminal = Terminal::new()?;
    let result = run(&mut terminal, &mut showcase);
    drop(terminal);

    if let Err(e) = &result {
        eprintln!("Error: {}", e);
    }
    result
}

fn run(terminal: &mut Terminal, showcase: &mut Showcase) -> io::Result<()> {
    let registry = HandlerRegistry::new();
    let mut focus = FocusState::new();
    let mut root = Element::box_();
    let mut rebuild = true;
    let mut repaint = true;

    loop {
        if rebuild || showcase.is_dirty() {
            // Handlers are rebuilt with the tree.
            registry.clear();
            let (width, _) = terminal.size()?;
            root = showcase
                .element(&registry, width)
                .map_err(io::Error::other)?;
            showcase.clear_dirty();
            focus.sync(&root);
            rebuild = false;
            repaint = true;
        }
        if repaint {
            apply_focus(&mut root, focus.focused());
            terminal.render(&root)?;
            repaint = false;
        }

        for event in terminal.poll(None)? {
            let (key, modifiers) = match event {
                Event::Key { key, modifiers } => (key, modifiers),
                Event::Resize { .. } => {
                    rebuild = true;
                    continue;
                }
            };
            match key {
                Key::Char('q') | Key::Escape => {
                    log::info!("Quit requested");
                    return Ok(());
                }
                Key::Char('c') if modifiers.ctrl => return Ok(()),
                Key::Tab | Key::Down | Key::Right => {
                    focus.focus_next(&root);
                    repaint = true;
                }
                Key::BackTab | Key::Up | Key::Left => {
                    focus.focus_prev(&root);
                    repaint = true;
                }
                Key::Backspace => {
                    if let Some(id) = focus.focused() {
                        registry.dispatch(id, ON_REMOVE);
                    }
                }
                key if key.is_activation() => {
                    let Some(id) = focus.focused() else {
                        continue;
                    };
                    if !registry.dispatch(id, ON_ACTIVATE) {
                        // Sidebar links are navigated by the host.
                        match find_element(&root, id) {
                            Some(element) => showcase.follow(element),
                            None => log::warn!("Activated unknown element {}", id),
                        }
                    }
                }
                _ => {}
            }
        }
    }
}
