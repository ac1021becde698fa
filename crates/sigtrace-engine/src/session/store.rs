use sigtrace_core::Domain;

use crate::session::Session;

/// The circuit-switched and packet-switched session of the single tracked mobile
#[derive(Debug, Clone)]
pub struct SessionStore {
    sessions: [Session; 2],
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        SessionStore {
            sessions: [Session::new(0, Domain::CircuitSwitched), Session::new(1, Domain::PacketSwitched)],
        }
    }

    pub fn get(&self, domain: Domain) -> &Session {
        &self.sessions[domain.index()]
    }

    pub fn get_mut(&mut self, domain: Domain) -> &mut Session {
        &mut self.sessions[domain.index()]
    }

    pub fn cs(&self) -> &Session {
        self.get(Domain::CircuitSwitched)
    }

    pub fn cs_mut(&mut self) -> &mut Session {
        self.get_mut(Domain::CircuitSwitched)
    }

    pub fn ps(&self) -> &Session {
        self.get(Domain::PacketSwitched)
    }

    pub fn ps_mut(&mut self) -> &mut Session {
        self.get_mut(Domain::PacketSwitched)
    }

    /// Both sessions at once, circuit-switched first
    pub fn both_mut(&mut self) -> (&mut Session, &mut Session) {
        let [cs, ps] = &mut self.sessions;
        (cs, ps)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Session> {
        self.sessions.iter_mut()
    }
}
