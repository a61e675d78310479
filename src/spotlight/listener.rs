type Callback = Box<dyn FnMut()>;

/// Sequence-level callbacks: the overlay started fading in, or finished fading out.
#[derive(Default)]
pub struct SpotlightListener {
    on_started: Option<Callback>,
    on_ended: Option<Callback>,
}

impl SpotlightListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_started(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_started = Some(Box::new(f));
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

    pub(crate) fn ended(&mut self) {
        if let Some(f) = self.on_ended.as_mut() {
            f();
        }
    }
}

impl std::fmt::Debug for SpotlightListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpotlightListener")
            .field("on_started", &self.on_started.is_some())
            .field("on_ended", &self.on_ended.is_some())
            .finish()
    }
}
