//! User-facing progress lines

/// Receives each progress line instead of stdout
pub type ProgressCallback = Box<dyn Fn(&str)>;

/// Centralized reporting of the fixed status lines shown to the user
pub struct ProgressReporter {
    callback: Option<ProgressCallback>,
}

impl ProgressReporter {
    pub fn new(callback: Option<ProgressCallback>) -> Self {
        Self { callback }
    }

    /// Reporter that prints to stdout
    pub fn stdout() -> Self {
        Self::new(None)
    }

    pub fn report(&self, message: &str) {
        match self.callback {
            Some(ref cb) => cb(message),
            None => println!("{}", message),
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::stdout()
    }
}

#[cfg(test)]
pub(crate) mod capture {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Reporter whose lines can be inspected afterwards
    pub fn reporter() -> (ProgressReporter, Rc<RefCell<Vec<String>>>) {
        let lines = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&lines);
        let reporter = ProgressReporter::new(Some(Box::new(move |msg: &str| {
            sink.borrow_mut().push(msg.to_string());
        })));
        (reporter, lines)
    }
}
