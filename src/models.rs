use crate::session::Session;

pub struct GameRenderState<'a> {
    pub session: &'a Session<'a>,
    pub feedback: Option<String>,
    pub hint: Option<String>,
    pub hint_pending: bool,
}
