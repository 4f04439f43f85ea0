/// An application created from a root component, not yet attached to anything.
///
/// Mounting consumes the application, an instance can only ever be mounted once.
pub struct Application<C> {
    root: C,
}

impl<C> Application<C> {
    pub fn new(root: C) -> Self {
        Self { root }
    }

    pub fn into_root(self) -> C {
        self.root
    }
}

/// A host environment applications can be created in and mounted to.
pub trait Framework<C> {
    type App;
    type Mounted;
    type Error;

    fn create_app(&mut self, root: C) -> Result<Self::App, Self::Error>;

    fn mount(&mut self, app: Self::App, target: &str) -> Result<Self::Mounted, Self::Error>;
}

/// Creates an application from `root` and mounts it on `target`.
///
/// Errors of the framework are passed through untouched, a failed creation
/// never reaches the mount.
pub fn bootstrap<F, C>(framework: &mut F, root: C, target: &str) -> Result<F::Mounted, F::Error>
where
    F: Framework<C>,
{
    tracing::debug!("creating application");
    let app = framework.create_app(root)?;

    tracing::debug!("mounting application on `{}`", target);
    framework.mount(app, target)
}
