use huarong::{LevelBuilder, Location, Motion, TileKind};

fn main() {
    // the goal tile sits one step up and one step left of the exit
    let mut engine = LevelBuilder::new()
        .add_tile(TileKind::Goal, Location(0, 2))
        .add_tile(TileKind::Vertical, Location(3, 0))
        .add_tile(TileKind::Horizontal, Location(0, 0))
        .add_tile(TileKind::Single, Location(3, 4))
        .build()
        .unwrap();

    assert_eq!(format!("{}", engine.board()), "22.3
...3
99..
99..
...1
");
    println!("{}signature {:#x}\n", engine.board(), engine.signature());

    let mut solved = false;
    let mut on_complete = || solved = true;

    for step in 1..=8 {
        let advance = engine.advance_notify(0, &mut on_complete).unwrap();
        println!("step {step}: {:?} {:?} -> {:?}", advance.motion, advance.from, advance.to);
        println!("{}signature {:#x}\n", engine.board(), engine.signature());

        if advance.completed || advance.motion == Motion::Idle {
            break;
        }
    }

    assert!(solved);
    assert_eq!(format!("{}", engine.board()), "22.3
...3
....
.99.
.991
");
}
