use super::{ExitStatus, Username};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportStage {
    Pending,
    UserAdded,
    EmailSet,
    Done,
}

impl ImportStage {
    pub fn next(self) -> Self {
        match self {
            ImportStage::Pending => ImportStage::UserAdded,
            ImportStage::UserAdded => ImportStage::EmailSet,
            ImportStage::EmailSet | ImportStage::Done => ImportStage::Done,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemberOutcome {
    pub username: Username,
    pub stage: ImportStage,
    pub add_user_status: Option<ExitStatus>,
    pub set_email_status: Option<ExitStatus>,
}

impl MemberOutcome {
    pub fn new(username: Username) -> Self {
        Self {
            username,
            stage: ImportStage::Pending,
            add_user_status: None,
            set_email_status: None,
        }
    }

    pub fn record_add_user(&mut self, status: ExitStatus) {
        self.add_user_status = Some(status);
        self.stage = self.stage.next();
    }

    pub fn record_set_email(&mut self, status: ExitStatus) {
        self.set_email_status = Some(status);
        self.stage = self.stage.next();
    }

    pub fn finish(&mut self) {
        self.stage = self.stage.next();
    }

    pub fn failed_commands(&self) -> usize {
        [self.add_user_status, self.set_email_status]
            .iter()
            .flatten()
            .filter(|status| !status.success)
            .count()
    }
}

/// Outcomes in roster order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ImportReport {
    pub outcomes: Vec<MemberOutcome>,
}

impl ImportReport {
    pub fn imported(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.stage == ImportStage::Done)
            .count()
    }

    pub fn failed_commands(&self) -> usize {
        self.outcomes.iter().map(MemberOutcome::failed_commands).sum()
    }
}
