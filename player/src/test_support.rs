//! Test-only helpers: record fixtures and a scripted gateway.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::core::risk::RiskBand;
use crate::core::types::{PurchaseOutcome, Session, ShopItem, SolveOutcome, Task};
use crate::io::gateway::{Gateway, GatewayError};

/// Create a fresh session with zeroed counters.
pub fn session(id: &str, lives: u32, gold: u32) -> Session {
    Session {
        id: id.to_string(),
        lives,
        gold,
        level: 0,
        score: 0,
        turn: 0,
        high_score: 0,
    }
}

/// Create a live task that expires in a few turns.
pub fn task(id: &str, risk: RiskBand, reward: u32) -> Task {
    Task {
        id: id.to_string(),
        description: format!("{} description", id),
        risk: Some(risk),
        expires_in: 5,
        reward,
        encrypted: None,
    }
}

pub fn expired_task(id: &str, risk: RiskBand, reward: u32) -> Task {
    Task {
        expires_in: 0,
        ..task(id, risk, reward)
    }
}

/// Create a live task whose risk label was missing or unknown.
pub fn task_without_risk(id: &str, reward: u32) -> Task {
    Task {
        risk: None,
        ..task(id, RiskBand::SureThing, reward)
    }
}

pub fn shop_item(id: &str, name: &str, cost: u32) -> ShopItem {
    ShopItem {
        id: id.to_string(),
        name: name.to_string(),
        cost,
    }
}

/// Solve response carrying every counter.
pub fn solved(success: bool, lives: u32, gold: u32, score: u32, turn: u32) -> SolveOutcome {
    SolveOutcome {
        success,
        lives: Some(lives),
        gold: Some(gold),
        score: Some(score),
        high_score: Some(score),
        turn: Some(turn),
        message: None,
    }
}

pub fn purchased(lives: u32, gold: u32, turn: u32) -> PurchaseOutcome {
    PurchaseOutcome {
        success: true,
        lives: Some(lives),
        gold: Some(gold),
        level: Some(0),
        turn: Some(turn),
    }
}

/// A call received by [`ScriptedGateway`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayCall {
    StartSession,
    ListTasks(String),
    SolveTask { session_id: String, task_id: String },
    ListShopItems(String),
    PurchaseItem { session_id: String, item_id: String },
}

#[derive(Default)]
struct Script {
    starts: VecDeque<Result<Session, GatewayError>>,
    tasks: VecDeque<Result<Vec<Task>, GatewayError>>,
    solves: VecDeque<Result<SolveOutcome, GatewayError>>,
    shops: VecDeque<Result<Vec<ShopItem>, GatewayError>>,
    purchases: VecDeque<Result<PurchaseOutcome, GatewayError>>,
    calls: Vec<GatewayCall>,
}

/// Gateway that replays queued responses per operation and logs every call.
///
/// An exhausted queue answers with a `Response` error so a runaway loop ends
/// the session instead of hanging the test.
#[derive(Default)]
pub struct ScriptedGateway {
    script: Mutex<Script>,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_start(mut self, result: Result<Session, GatewayError>) -> Self {
        self.script_mut().starts.push_back(result);
        self
    }

    pub fn with_tasks(mut self, result: Result<Vec<Task>, GatewayError>) -> Self {
        self.script_mut().tasks.push_back(result);
        self
    }

    /// Queue the same listing for `times` consecutive turns.
    pub fn with_tasks_repeated(mut self, tasks: Vec<Task>, times: usize) -> Self {
        for _ in 0..times {
            self.script_mut().tasks.push_back(Ok(tasks.clone()));
        }
        self
    }

    pub fn with_solve(mut self, result: Result<SolveOutcome, GatewayError>) -> Self {
        self.script_mut().solves.push_back(result);
        self
    }

    pub fn with_shop(mut self, result: Result<Vec<ShopItem>, GatewayError>) -> Self {
        self.script_mut().shops.push_back(result);
        self
    }

    pub fn with_purchase(mut self, result: Result<PurchaseOutcome, GatewayError>) -> Self {
        self.script_mut().purchases.push_back(result);
        self
    }

    /// Every call received so far, in order.
    pub fn calls(&self) -> Vec<GatewayCall> {
        self.lock().calls.clone()
    }

    /// Task ids passed to `solve_task`, in order.
    pub fn solved_task_ids(&self) -> Vec<String> {
        self.lock()
            .calls
            .iter()
            .filter_map(|call| match call {
                GatewayCall::SolveTask { task_id, .. } => Some(task_id.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, matches: impl Fn(&GatewayCall) -> bool) -> usize {
        self.lock().calls.iter().filter(|call| matches(call)).count()
    }

    fn script_mut(&mut self) -> &mut Script {
        self.script.get_mut().expect("script lock poisoned")
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Script> {
        self.script.lock().expect("script lock poisoned")
    }
}

fn next_scripted<T>(
    queue: &mut VecDeque<Result<T, GatewayError>>,
    action: &str,
) -> Result<T, GatewayError> {
    queue.pop_front().unwrap_or_else(|| {
        Err(GatewayError::Response {
            action: action.to_string(),
            status: 500,
            body: "script exhausted".to_string(),
        })
    })
}

impl Gateway for ScriptedGateway {
    fn start_session(&self) -> Result<Session, GatewayError> {
        let mut script = self.lock();
        script.calls.push(GatewayCall::StartSession);
        next_scripted(&mut script.starts, "start new game")
    }

    fn list_tasks(&self, session_id: &str) -> Result<Vec<Task>, GatewayError> {
        let mut script = self.lock();
        script.calls.push(GatewayCall::ListTasks(session_id.to_string()));
        next_scripted(&mut script.tasks, "list missions")
    }

    fn solve_task(&self, session_id: &str, task_id: &str) -> Result<SolveOutcome, GatewayError> {
        let mut script = self.lock();
        script.calls.push(GatewayCall::SolveTask {
            session_id: session_id.to_string(),
            task_id: task_id.to_string(),
        });
        next_scripted(&mut script.solves, "solve mission")
    }

    fn list_shop_items(&self, session_id: &str) -> Result<Vec<ShopItem>, GatewayError> {
        let mut script = self.lock();
        script
            .calls
            .push(GatewayCall::ListShopItems(session_id.to_string()));
        next_scripted(&mut script.shops, "list shop items")
    }

    fn purchase_item(
        &self,
        session_id: &str,
        item_id: &str,
    ) -> Result<PurchaseOutcome, GatewayError> {
        let mut script = self.lock();
        script.calls.push(GatewayCall::PurchaseItem {
            session_id: session_id.to_string(),
            item_id: item_id.to_string(),
        });
        next_scripted(&mut script.purchases, "purchase item")
    }
}
