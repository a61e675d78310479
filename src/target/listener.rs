use crate::spotlight::control::Control;

type Callback = Box<dyn FnMut()>;
type ClickCallback = Box<dyn FnMut(&mut Control)>;

/// Per-target lifecycle callbacks. Every callback is optional.
///
/// `on_clicked` receives a [`Control`] through which it may request `next`, `previous`,
/// `show` or `finish`; those requests run after the callback returns.
#[derive(Default)]
pub struct TargetListener {
    on_started: Option<Callback>,
    on_clicked: Option<ClickCallback>,
    on_ended: Option<Callback>,
}

impl TargetListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_started(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_started = Some(Box::new(f));
        self
    }

    pub fn on_clicked(mut self, f: impl FnMut(&mut Control) + 'static) -> Self {
        self.on_clicked = Some(Box::new(f));
        self
    }

    pub fn on_ended(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_ended = Some(Box::new(f));
        self
    }

    pub(crate) fn started(&mut self) {
        if let Some(f) = self.on_started.as_mut() {
            f();
        }
    }

    pub(crate) fn clicked(&mut self, control: &mut Control) {
        if let Some(f) = self.on_clicked.as_mut() {
            f(control);
        }
    }

    pub(crate) fn ended(&mut self) {
        if let Some(f) = self.on_ended.as_mut() {
            f();
        }
    }
}

impl std::fmt::Debug for TargetListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TargetListener")
            .field("on_started", &self.on_started.is_some())
            .field("on_clicked", &self.on_clicked.is_some())
            .field("on_ended", &self.on_ended.is_some())
            .finish()
    }
}
