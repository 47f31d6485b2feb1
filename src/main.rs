use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use skyward::sim::{flap, process_tick, FlappySim, Mode, SimConfig};
use skyward::ui::game_scene::render_game;
use skyward::ui::leaderboard_scene::render_leaderboard;
use skyward::ui::menu_scene::{MenuItem, MenuScreen};
use skyward::ui::rules_scene::render_rules;
use skyward::{build_info, LeaderboardStore, FRAME_INTERVAL_MS, INPUT_POLL_MS, MENU_POLL_MS};
use std::io;
use std::time::{Duration, Instant};

enum Screen {
    Menu,
    Rules,
    Leaderboard,
    Game,
}

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "skyward {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Skyward - Terminal Flappy-Bird\n");
                println!("Usage: skyward [options]\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'skyward --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    // RUST_LOG-controlled; stderr output is invisible behind the alternate
    // screen but lands in a file via shell redirection
    env_logger::init();

    let store = LeaderboardStore::new()?;
    let mut board = store.load();
    let mut sim = FlappySim::new(SimConfig::default(), board.high_score());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut current_screen = Screen::Menu;
    let mut menu = MenuScreen::new();
    let mut confirm_clear = false;

    // Main loop
    'outer: loop {
        match current_screen {
            Screen::Menu => {
                terminal.draw(|f| {
                    menu.draw(f, f.size(), board.high_score());
                })?;

                if event::poll(Duration::from_millis(MENU_POLL_MS))? {
                    if let Event::Key(key_event) = event::read()? {
                        match key_event.code {
                            KeyCode::Up => menu.move_up(),
                            KeyCode::Down => menu.move_down(),
                            KeyCode::Enter => match menu.selected() {
                                MenuItem::Play => {
                                    sim.abandon();
                                    current_screen = Screen::Game;
                                }
                                MenuItem::Rules => current_screen = Screen::Rules,
                                MenuItem::Leaderboard => {
                                    board = store.load();
                                    confirm_clear = false;
                                    current_screen = Screen::Leaderboard;
                                }
                                MenuItem::Quit => break 'outer,
                            },
                            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => break 'outer,
                            _ => {}
                        }
                    }
                }
            }

            Screen::Rules => {
                terminal.draw(|f| {
                    render_rules(f, f.size());
                })?;

                if event::poll(Duration::from_millis(MENU_POLL_MS))? {
                    if let Event::Key(key_event) = event::read()? {
                        if matches!(key_event.code, KeyCode::Esc | KeyCode::Enter) {
                            current_screen = Screen::Menu;
                        }
                    }
                }
            }

            Screen::Leaderboard => {
                terminal.draw(|f| {
                    render_leaderboard(f, f.size(), &board, confirm_clear);
                })?;

                if event::poll(Duration::from_millis(MENU_POLL_MS))? {
                    if let Event::Key(key_event) = event::read()? {
                        if confirm_clear {
                            // Only 'y' goes through with it
                            if matches!(key_event.code, KeyCode::Char('y') | KeyCode::Char('Y')) {
                                store.clear();
                                board = store.load();
                                sim.high_score = board.high_score();
                            }
                            confirm_clear = false;
                        } else {
                            match key_event.code {
                                KeyCode::Char('c') | KeyCode::Char('C') => {
                                    if !board.is_empty() {
                                        confirm_clear = true;
                                    }
                                }
                                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
                                    current_screen = Screen::Menu;
                                }
                                _ => {}
                            }
                        }
                    }
                }
            }

            Screen::Game => {
                let mut last_tick = Instant::now();
                let mut rng = rand::thread_rng();

                loop {
                    let snap = sim.snapshot();
                    terminal.draw(|f| {
                        render_game(f, f.size(), &snap);
                    })?;

                    if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
                        if let Event::Key(key_event) = event::read()? {
                            match key_event.code {
                                KeyCode::Char(' ') | KeyCode::Up => flap(&mut sim),
                                KeyCode::Enter => {
                                    // After a crash: commit the run, start over
                                    if sim.mode == Mode::GameOver {
                                        if let Some(score) = sim.reset() {
                                            board = store.save(score);
                                            sim.high_score = board.high_score();
                                        }
                                    }
                                }
                                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
                                    if sim.mode == Mode::GameOver {
                                        // The finished run still counts
                                        if let Some(score) = sim.reset() {
                                            board = store.save(score);
                                            sim.high_score = board.high_score();
                                        }
                                    } else {
                                        sim.abandon();
                                    }
                                    current_screen = Screen::Menu;
                                    break;
                                }
                                _ => {}
                            }
                        }
                    }

                    // Simulation tick at the frame cadence
                    if last_tick.elapsed() >= Duration::from_millis(FRAME_INTERVAL_MS) {
                        process_tick(&mut sim, &mut rng);
                        last_tick = Instant::now();
                    }
                }
            }
        }
    }

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    println!("Thanks for flying!");

    Ok(())
}
