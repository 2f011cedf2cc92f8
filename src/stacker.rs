use tracing::{debug, trace, warn};

use crate::command::Command;
use crate::config::{CommandStackerOptions, DEFAULT_CAPACITY};


/// Bounded undo/redo history of commands
///
/// Commands are owned by the stacker once added and live in exactly one of
/// the two stacks until they are evicted or the stacker is cleared. Both
/// stacks keep the oldest entry first and the next entry to act on last.
#[derive(Debug)]
pub struct CommandStacker<T: Command> {
    undo_stack: Vec<T>,
    redo_stack: Vec<T>,
    capacity: usize,
}

impl<T: Command> Default for CommandStacker<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Command> CommandStacker<T> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// A capacity of zero falls back to [`DEFAULT_CAPACITY`]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_options(CommandStackerOptions::with_capacity(capacity))
    }

    pub fn with_options(options: CommandStackerOptions) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            capacity: options.resolved_capacity(),
        }
    }

    /// Record a command that has already been applied (clears redo stack)
    ///
    /// When the undo stack overflows, the entry just before the new one is
    /// dropped, so the oldest history and the newest command both survive.
    pub fn add(&mut self, command: T) -> &mut T {
        self.undo_stack.push(command);
        self.redo_stack.clear();

        if self.undo_stack.len() > self.capacity {
            let evicted = self.undo_stack.len() - 2;
            self.undo_stack.remove(evicted);
            debug!(
                index = evicted,
                capacity = self.capacity,
                "evicted command from undo stack"
            );
        }

        trace!(undo = self.undo_stack.len(), "command added");

        let tail = self.undo_stack.len() - 1;
        &mut self.undo_stack[tail]
    }

    /// Run a command and record it
    ///
    /// If the command fails to run it is not recorded and the error is
    /// returned as is.
    pub fn run(&mut self, mut command: T) -> Result<&mut T, T::Error> {
        command.run()?;
        Ok(self.add(command))
    }

    /// Undo the last command, returns it once it sits on the redo stack
    ///
    /// A command whose `undo` fails has already left the undo stack and is
    /// dropped.
    pub fn undo(&mut self) -> Result<Option<&mut T>, T::Error> {
        let mut command = match self.undo_stack.pop() {
            Some(command) => command,
            None => return Ok(None),
        };

        if let Err(e) = command.undo() {
            warn!(undo = self.undo_stack.len(), "undo failed, command dropped from history");
            return Err(e);
        }

        self.redo_stack.push(command);
        trace!(undo = self.undo_stack.len(), redo = self.redo_stack.len(), "command undone");
        Ok(self.redo_stack.last_mut())
    }

    /// Run the last undone command again, returns it once it sits on the undo stack
    ///
    /// The push onto the undo stack is not capacity-checked. A command whose
    /// `run` fails here is dropped.
    pub fn redo(&mut self) -> Result<Option<&mut T>, T::Error> {
        let mut command = match self.redo_stack.pop() {
            Some(command) => command,
            None => return Ok(None),
        };

        if let Err(e) = command.run() {
            warn!(redo = self.redo_stack.len(), "redo failed, command dropped from history");
            return Err(e);
        }

        self.undo_stack.push(command);
        trace!(undo = self.undo_stack.len(), redo = self.redo_stack.len(), "command redone");
        Ok(self.undo_stack.last_mut())
    }

    /// Drop both histories without running or undoing anything
    pub fn clear(&mut self) {
        trace!(undo = self.undo_stack.len(), redo = self.redo_stack.len(), "clearing history");
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn undo_stack(&self) -> &[T] {
        &self.undo_stack
    }

    pub fn redo_stack(&self) -> &[T] {
        &self.redo_stack
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Peek at the command the next `undo` would act on
    pub fn peek_undo(&self) -> Option<&T> {
        self.undo_stack.last()
    }

    /// Peek at the command the next `redo` would act on
    pub fn peek_redo(&self) -> Option<&T> {
        self.redo_stack.last()
    }
}
