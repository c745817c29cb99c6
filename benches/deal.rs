use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use freecell_engine::{CardRef, EngineConfig, Game, PileId};

fn bench_new_game(c: &mut Criterion) {
    let mut g = c.benchmark_group("freecell_deal");
    for autoplay in [false, true] {
        g.bench_with_input(BenchmarkId::new("new_game", autoplay), &autoplay, |b, &autoplay| {
            let mut game = Game::new(EngineConfig::default().with_seed(7).with_autoplay(autoplay));
            b.iter(|| black_box(game.new_game()))
        });
    }
    g.finish();
}

fn bench_transfer_and_undo(c: &mut Criterion) {
    let mut game = Game::new(EngineConfig::default().with_seed(11));
    game.new_game();

    // Move each cascade top to a freecell, then undo back to the dealt table
    c.bench_function("freecell_transfer_undo", |b| {
        b.iter(|| {
            for slot in 0..8 {
                let Some(top) = game.top_of(PileId::cascade(slot)) else {
                    continue;
                };
                let before = game.history().len();
                if game.attempt_transfer(black_box(top), PileId::freecell(0)).is_ok() {
                    while game.history().len() > before {
                        let _ = game.undo();
                    }
                }
            }
        })
    });
}

fn bench_safe_promotion_scan(c: &mut Criterion) {
    let mut game = Game::new(EngineConfig::default().with_seed(3).with_autoplay(false));
    game.new_game();
    let probe = CardRef::new(PileId::cascade(0), 0);

    c.bench_function("find_safe_promotion", |b| {
        b.iter(|| {
            black_box(game.find_safe_promotion());
            black_box(game.can_pick_up(probe));
        })
    });
}

criterion_group!(benches, bench_new_game, bench_transfer_and_undo, bench_safe_promotion_scan);
criterion_main!(benches);
