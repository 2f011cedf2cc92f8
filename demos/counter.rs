//! Walks a counter through run, undo and redo with trace logging enabled.
//!
//! cargo run --example counter

use command_stacker::{CommandStacker, FnCommand};
use std::cell::Cell;
use std::rc::Rc;
use tracing::info;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let counter = Rc::new(Cell::new(0));
    let mut stacker = CommandStacker::with_capacity(3);

    for _ in 0..4 {
        let (up, down) = (counter.clone(), counter.clone());
        let step = FnCommand::new(move || up.set(up.get() + 1), move || down.set(down.get() - 1));
        if let Err(e) = stacker.run(step) {
            match e {}
        }
        info!(counter = counter.get(), undo = stacker.undo_len(), "ran step");
    }

    while stacker.can_undo() {
        if let Err(e) = stacker.undo() {
            match e {}
        }
        info!(counter = counter.get(), redo = stacker.redo_len(), "undid step");
    }

    if let Err(e) = stacker.redo() {
        match e {}
    }
    info!(
        counter = counter.get(),
        undo = stacker.undo_len(),
        redo = stacker.redo_len(),
        "redid step"
    );

    stacker.clear();
    info!(counter = counter.get(), "history cleared");
}
