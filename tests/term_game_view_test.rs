use tui_minesweeper::core::Game;
use tui_minesweeper::input::HELP_TEXT;
use tui_minesweeper::term::{AnchorY, GameView, GlyphSet, Viewport};

/// Top-anchored view sized exactly for the board, so the board starts at (0, 0).
fn view(glyphs: GlyphSet) -> GameView {
    GameView::default()
        .with_anchor_y(AnchorY::Top)
        .with_glyphs(glyphs)
        .with_help(HELP_TEXT)
}

/// Terminal column of the glyph for board column `x`.
fn glyph_x(x: u16) -> u16 {
    2 + x * 4
}

#[test]
fn term_view_renders_border_corners() {
    let game = Game::new(3, 3, 1).unwrap();
    let view = view(GlyphSet::plain());
    let vp = view.required_size(3, 3);
    let fb = view.render(&game.snapshot(), (0, 0), vp);

    // 3 cells * 4 columns + border.
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(13, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 4).unwrap().ch, '└');
    assert_eq!(fb.get(13, 4).unwrap().ch, '┘');
}

#[test]
fn term_view_panel_before_first_reveal() {
    let game = Game::new(3, 3, 2).unwrap();
    let view = view(GlyphSet::plain());
    let vp = view.required_size(3, 3);
    let fb = view.render(&game.snapshot(), (0, 0), vp);

    assert!(fb.row_text(0).contains("TIME"));
    assert!(fb.row_text(1).trim_end().ends_with('-'));
    assert!(fb.row_text(3).contains("MINES"));
    assert!(fb.row_text(4).trim_end().ends_with('2'));
    assert!(!fb.row_text(6).contains("You"));
}

#[test]
fn term_view_shows_numbers_and_flags() {
    let mut game = Game::with_mines(3, 3, &[(2, 2)]).unwrap();
    game.reveal(1, 1);
    game.flag(2, 0);

    let view = view(GlyphSet::plain());
    let vp = view.required_size(3, 3);
    let fb = view.render(&game.snapshot(), (1, 1), vp);

    assert_eq!(fb.get(glyph_x(1), 2).unwrap().ch, '1');
    assert_eq!(fb.get(glyph_x(2), 1).unwrap().ch, '?');
    assert_eq!(fb.get(glyph_x(0), 1).unwrap().ch, '#');
    // Cursor markers around (1, 1).
    assert_eq!(fb.get(glyph_x(1) - 1, 2).unwrap().ch, '-');
    assert_eq!(fb.get(glyph_x(1) + 2, 2).unwrap().ch, '-');
    // Flag count is subtracted from the mine count.
    assert!(fb.row_text(4).trim_end().ends_with('0'));
}

#[test]
fn term_view_emoji_glyphs_take_two_columns() {
    let mut game = Game::with_mines(3, 3, &[(2, 2)]).unwrap();
    game.flag(0, 0);
    game.reveal(2, 2);

    let view = view(GlyphSet::emoji());
    let vp = view.required_size(3, 3);
    let fb = view.render(&game.snapshot(), (1, 1), vp);

    assert_eq!(fb.get(glyph_x(0), 1).unwrap().ch, '🚩');
    assert!(fb.get(glyph_x(0) + 1, 1).unwrap().is_continuation());
    assert_eq!(fb.get(glyph_x(2), 3).unwrap().ch, '💣');
    assert!(fb.get(glyph_x(2) + 1, 3).unwrap().is_continuation());
}

#[test]
fn term_view_end_banners() {
    let view = view(GlyphSet::plain());
    let vp = view.required_size(4, 4);

    let mut won = Game::with_mines(4, 4, &[(3, 3)]).unwrap();
    won.reveal(0, 0);
    won.flag(3, 3);
    let fb = view.render(&won.snapshot(), (0, 0), vp);
    assert!(fb.row_text(6).contains("You Won!"));

    let mut lost = Game::with_mines(4, 4, &[(3, 3)]).unwrap();
    lost.reveal(0, 0);
    lost.reveal(3, 3);
    let fb = view.render(&lost.snapshot(), (0, 0), vp);
    assert!(fb.row_text(6).contains("You Lost"));
    assert_eq!(fb.get(glyph_x(3), 4).unwrap().ch, '*');
}

#[test]
fn term_view_lists_help() {
    let game = Game::new(3, 3, 1).unwrap();
    let view = view(GlyphSet::plain());
    let vp = view.required_size(3, 3);
    let fb = view.render(&game.snapshot(), (0, 0), vp);

    let text: Vec<String> = (0..vp.height).map(|y| fb.row_text(y)).collect();
    for line in HELP_TEXT {
        assert!(
            text.iter().any(|row| row.contains(line)),
            "missing help line {line:?}"
        );
    }
}

#[test]
fn term_view_centered_keeps_last_help_line_visible() {
    let game = Game::new(10, 10, 10).unwrap();
    let view = GameView::default().with_help(HELP_TEXT);
    let vp = view.required_size(10, 10);
    view.check_fits(10, 10, vp).unwrap();

    let fb = view.render(&game.snapshot(), (0, 0), vp);
    let last = HELP_TEXT.last().unwrap();
    assert!(
        (0..vp.height).any(|y| fb.row_text(y).contains(last)),
        "last help line not drawn in a viewport check_fits accepted"
    );
}

#[test]
fn term_view_centers_in_larger_viewport() {
    let game = Game::new(3, 3, 1).unwrap();
    let view = GameView::default().with_glyphs(GlyphSet::plain());
    let need = view.required_size(3, 3);
    let vp = Viewport::new(need.width + 10, need.height + 10);
    let fb = view.render(&game.snapshot(), (0, 0), vp);

    // The board + panel block is centred in both directions.
    let top = (vp.height - need.height) / 2;
    assert_eq!(fb.get(5, top).unwrap().ch, '┌');
}
