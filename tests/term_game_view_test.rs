use escape_qubits::core::{seeded, GameState, HazardToken};
use escape_qubits::term::{FrameBuffer, GameView, Viewport};
use escape_qubits::types::{GameConfig, GridPos, Intent};

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

fn count_char(fb: &FrameBuffer, ch: char) -> usize {
    fb.cells().iter().filter(|c| c.ch == ch).count()
}

fn quiet_game(cap: usize) -> GameState {
    let cfg = GameConfig::default().with_max_active_hazards(cap);
    GameState::with_config(cfg, seeded(1), 0.0).unwrap()
}

#[test]
fn term_view_renders_border_corners() {
    let snap = quiet_game(0).snapshot(0.0);
    // 10 tiles x 4 wide + border = 42; 10 x 2 tall + border = 22; plus 3 HUD rows.
    let fb = GameView::default().render(&snap, Viewport::new(42, 25));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(41, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(41, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_draws_player_on_start_tile() {
    let snap = quiet_game(0).snapshot(0.0);
    let fb = GameView::default().render(&snap, Viewport::new(42, 25));

    // Start (0, 9): tile origin (1, 19); the mark is two glyphs at x = 2..4.
    assert_eq!(fb.get(2, 19).unwrap().ch, '◉');
    assert_eq!(fb.get(3, 19).unwrap().ch, '◉');
    assert_eq!(count_char(&fb, '◉'), 2);
}

#[test]
fn term_view_highlights_goal_tile() {
    let snap = quiet_game(0).snapshot(0.0);
    let fb = GameView::default().render(&snap, Viewport::new(42, 25));

    // Goal (9, 0): tile origin (37, 1).
    let star = fb.get(38, 1).unwrap();
    assert_eq!(star.ch, '★');
    let goal_bg = fb.get(37, 2).unwrap().style.bg;
    assert_eq!((goal_bg.r, goal_bg.g, goal_bg.b), (255, 215, 0));
}

#[test]
fn term_view_checkerboard_alternates_between_neighbours() {
    let snap = quiet_game(0).snapshot(0.0);
    let fb = GameView::default().render(&snap, Viewport::new(42, 25));

    let a = fb.get(1, 1).unwrap().style.bg;
    let b = fb.get(5, 1).unwrap().style.bg;
    let c = fb.get(9, 1).unwrap().style.bg;
    assert_ne!(a, b);
    assert_ne!(b, c);
}

#[test]
fn term_view_draws_hazards_with_fading_core() {
    let mut game = quiet_game(1);
    game.insert_hazard(HazardToken::new(GridPos::new(4, 4), 0.0, 2.0));
    let view = GameView::default();

    let fresh = view.render(&game.snapshot(0.0), Viewport::new(42, 25));
    let faded = view.render(&game.snapshot(1.9), Viewport::new(42, 25));

    // Hazard (4, 4): tile origin (17, 9); the core sits at x = 18..20.
    let fresh_core = fresh.get(18, 9).unwrap();
    let faded_core = faded.get(18, 9).unwrap();
    assert_eq!(fresh_core.ch, '●');
    assert_eq!(faded_core.ch, '●');
    // Fresh core is close to white; faded core sinks into the glow.
    assert!(fresh_core.style.fg.r >= faded_core.style.fg.r);
    assert!(fresh_core.style.fg.g >= faded_core.style.fg.g);
    assert_eq!(count_char(&fresh, '●'), 2);

    let gone = view.render(&game.snapshot(2.5), Viewport::new(42, 25));
    assert_eq!(count_char(&gone, '●'), 0);
}

#[test]
fn term_view_hud_shows_time_and_bar() {
    let game = quiet_game(0);
    let view = GameView::default();

    let full = view.render(&game.snapshot(0.0), Viewport::new(42, 25));
    assert!(full.row_text(22).starts_with("Time left: 45s"));
    assert_eq!(count_char(&full, '░'), 0);

    let half = view.render(&game.snapshot(22.5), Viewport::new(42, 25));
    assert!(half.row_text(22).starts_with("Time left: 22s"));
    let filled = count_char(&half, '█');
    let empty = count_char(&half, '░');
    assert!(filled > 0 && empty > 0);
    assert!(filled.abs_diff(empty) <= 1);

    assert!(screen_text(&full).contains("Run 1"));
}

#[test]
fn term_view_shows_win_banner() {
    let mut game = quiet_game(0);
    for _ in 0..9 {
        game.apply_intent(Intent::MoveRight, 1.0);
        game.apply_intent(Intent::MoveUp, 1.0);
    }
    let fb = GameView::default().render(&game.snapshot(2.0), Viewport::new(42, 25));
    let text = screen_text(&fb);
    assert!(text.contains("YOU WIN!"));
    assert!(text.contains("Press R to play again"));
}

#[test]
fn term_view_shows_game_over_banner() {
    let mut game = quiet_game(0);
    game.advance(45.0);
    let fb = GameView::default().render(&game.snapshot(45.0), Viewport::new(60, 30));
    let text = screen_text(&fb);
    assert!(text.contains("GAME OVER"));
    assert!(text.contains("Press R to try again"));
    assert!(text.contains("Time left: 0s"));
}

#[test]
fn term_view_shows_pause_banner() {
    let mut game = quiet_game(0);
    game.apply_intent(Intent::Pause, 3.0);
    let fb = GameView::default().render(&game.snapshot(10.0), Viewport::new(42, 25));
    assert!(screen_text(&fb).contains("PAUSED"));
}

#[test]
fn term_view_centers_board_on_large_viewports() {
    let snap = quiet_game(0).snapshot(0.0);
    let fb = GameView::default().render(&snap, Viewport::new(52, 35));
    // origin = ((52 - 42) / 2, (35 - 25) / 2) = (5, 5).
    assert_eq!(fb.get(5, 5).unwrap().ch, '┌');
}

#[test]
fn term_view_degrades_on_small_viewports() {
    let snap = quiet_game(0).snapshot(0.0);
    let view = GameView::default();

    // Half-size tiles: 10 x 2 + 2 = 22 wide, 10 + 2 + 3 = 15 tall.
    let fb = view.render(&snap, Viewport::new(22, 15));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 11).unwrap().ch, '┘');

    let tiny = view.render(&snap, Viewport::new(8, 4));
    assert_eq!(tiny.row_text(0), "terminal");
}
