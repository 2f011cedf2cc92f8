use std::convert::Infallible;
use std::fmt;

/// A reversible unit of work
///
/// `run` may be called more than once over a command's life: once when it is
/// first run and again on every redo. `undo` reverses the latest `run`.
pub trait Command {
    type Error;

    fn run(&mut self) -> Result<(), Self::Error>;

    fn undo(&mut self) -> Result<(), Self::Error>;
}

impl<C: Command + ?Sized> Command for Box<C> {
    type Error = C::Error;

    fn run(&mut self) -> Result<(), Self::Error> {
        (**self).run()
    }

    fn undo(&mut self) -> Result<(), Self::Error> {
        (**self).undo()
    }
}

/// A command built from a pair of closures
pub struct FnCommand<R, U>
where
    R: FnMut(),
    U: FnMut(),
{
    run: R,
    undo: U,
}

impl<R, U> FnCommand<R, U>
where
    R: FnMut(),
    U: FnMut(),
{
    pub fn new(run: R, undo: U) -> Self {
        Self { run, undo }
    }
}

impl<R, U> Command for FnCommand<R, U>
where
    R: FnMut(),
    U: FnMut(),
{
    type Error = Infallible;

    fn run(&mut self) -> Result<(), Infallible> {
        (self.run)();
        Ok(())
    }

    fn undo(&mut self) -> Result<(), Infallible> {
        (self.undo)();
        Ok(())
    }
}

impl<R, U> fmt::Debug for FnCommand<R, U>
where
    R: FnMut(),
    U: FnMut(),
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnCommand").finish_non_exhaustive()
    }
}
