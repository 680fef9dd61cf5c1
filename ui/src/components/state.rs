use crate::components::common::{ComponentId, Msg};
use crate::error::{AppError, AppResult};
use tuirealm::{Application, Component, MockComponent, NoUserEvent, Sub};

/// Component lifecycle hook, run right before the component is handed to the
/// application.
pub trait ComponentState {
    fn mount(&mut self) -> AppResult<()>;
}

/// Mount helpers that run [`ComponentState::mount`] first.
pub trait ComponentStateMount {
    fn mount_with_state<C>(
        &mut self,
        id: ComponentId,
        component: C,
        subs: Vec<Sub<ComponentId, NoUserEvent>>,
    ) -> AppResult<()>
    where
        C: ComponentState + MockComponent + Component<Msg, NoUserEvent> + 'static;

    fn remount_with_state<C>(
        &mut self,
        id: ComponentId,
        component: C,
        subs: Vec<Sub<ComponentId, NoUserEvent>>,
    ) -> AppResult<()>
    where
        C: ComponentState + MockComponent + Component<Msg, NoUserEvent> + 'static;
}

impl ComponentStateMount for Application<ComponentId, Msg, NoUserEvent> {
    fn mount_with_state<C>(
        &mut self,
        id: ComponentId,
        mut component: C,
        subs: Vec<Sub<ComponentId, NoUserEvent>>,
    ) -> AppResult<()>
    where
        C: ComponentState + MockComponent + Component<Msg, NoUserEvent> + 'static,
    {
        component.mount()?;
        self.mount(id.clone(), Box::new(component), subs)
            .map_err(|e| AppError::Component(format!("Failed to mount {id:?}: {e}")))
    }

    fn remount_with_state<C>(
        &mut self,
        id: ComponentId,
        mut component: C,
        subs: Vec<Sub<ComponentId, NoUserEvent>>,
    ) -> AppResult<()>
    where
        C: ComponentState + MockComponent + Component<Msg, NoUserEvent> + 'static,
    {
        component.mount()?;
        self.remount(id.clone(), Box::new(component), subs)
            .map_err(|e| AppError::Component(format!("Failed to remount {id:?}: {e}")))
    }
}
