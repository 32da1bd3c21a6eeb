//! # SuryaOptiAI Benchmarks
//!
//! | Area | Operation |
//! |------|-----------|
//! | Navigation | resolve_view / navigation_items over every state |
//! | Key handling | a full select → browse → reset session |
//! | Rendering | one frame per view on a 120x40 test terminal |

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};

use surya_core::{navigation_items, resolve_view, Navigator, SystemType, TabId};
use surya_tui::{ui, App};

const STATES: [Option<SystemType>; 3] = [None, Some(SystemType::SharedGrid), Some(SystemType::Private)];

fn bench_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigation");

    group.bench_function("resolve_view_all_states", |b| {
        b.iter(|| {
            for system in STATES {
                for tab in TabId::ALL {
                    black_box(resolve_view(black_box(system), black_box(tab)));
                }
            }
        })
    });

    group.bench_function("navigation_items_all_states", |b| {
        b.iter(|| {
            for system in STATES {
                black_box(navigation_items(black_box(system)));
            }
        })
    });

    group.finish();
}

fn bench_key_session(c: &mut Criterion) {
    let keys = [
        KeyCode::Down,
        KeyCode::Enter,
        KeyCode::Tab,
        KeyCode::Char('v'),
        KeyCode::Char('4'),
        KeyCode::Char(' '),
        KeyCode::Char('+'),
        KeyCode::Char('s'),
        KeyCode::Char('1'),
    ];

    c.bench_function("app_key_session", |b| {
        b.iter(|| {
            let mut app = App::new();
            for code in keys {
                app.on_key(code, KeyModifiers::NONE);
            }
            black_box(app.navigator.view())
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for tab in TabId::ALL {
        let app = App::with_navigator(Navigator::with_state(Some(SystemType::Private), tab));
        let Ok(mut terminal) = Terminal::new(TestBackend::new(120, 40)) else {
            continue;
        };
        group.bench_function(tab.id(), |b| {
            b.iter(|| {
                let _ = terminal.draw(|frame| ui::render(frame, &app));
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_resolution, bench_key_session, bench_render);
criterion_main!(benches);
