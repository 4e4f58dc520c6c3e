use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use lazer_showdown_core::{Direction, GameState, Mirror, MirrorKind, trace};
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn base_state() -> GameState {
    GameState::initial(&mut SmallRng::seed_from_u64(0))
}

/// Worst-ish case for the tracer: a serpentine of mirrors the beam follows
/// up and down across most of the board.
fn zigzag_state() -> GameState {
    let mut state = base_state();
    state.laser.pos = Some((0, 7));
    state.laser.dir = Direction::Up;
    state.mirrors.clear();

    let kind = |col: u8| {
        if col % 2 == 1 {
            MirrorKind::Backslash
        } else {
            MirrorKind::Slash
        }
    };
    state.mirrors.push(Mirror {
        pos: Some((0, 6)),
        kind: MirrorKind::Backslash,
    });
    for col in 1..7u8 {
        state.mirrors.push(Mirror {
            pos: Some((col, 0)),
            kind: kind(col),
        });
        state.mirrors.push(Mirror {
            pos: Some((col, 6)),
            kind: kind(col),
        });
    }
    state
}

fn bench_trace(c: &mut Criterion) {
    let straight = {
        let mut state = base_state();
        state.laser.pos = Some((3, 7));
        state.laser.dir = Direction::Up;
        state
    };
    let zigzag = zigzag_state();

    c.bench_function("trace_straight", |b| {
        b.iter(|| trace(black_box(&straight)))
    });
    c.bench_function("trace_zigzag", |b| b.iter(|| trace(black_box(&zigzag))));
}

criterion_group!(benches, bench_trace);
criterion_main!(benches);
