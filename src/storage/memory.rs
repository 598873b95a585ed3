//! In-memory storage.
//!
//! Plain `Vec` collections behind `RwLock`s, scanned linearly. Single-process
//! only: there is no cross-request atomicity beyond each individual lock.

use std::sync::RwLock;

use chrono::Utc;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::board::Board;
use crate::models::task::{Task, TaskDraft, TaskPatch, TaskStatus};
use crate::models::user::User;

use super::{DeletePolicy, Store};

/// An in-memory [`Store`].
pub struct MemoryStore {
    users: RwLock<Vec<User>>,
    boards: RwLock<Vec<Board>>,
    tasks: RwLock<Vec<Task>>,
    delete_policy: DeletePolicy,
}

impl MemoryStore {
    /// Creates an empty store with the given board-delete policy.
    pub fn new(delete_policy: DeletePolicy) -> Self {
        Self {
            users: RwLock::new(Vec::new()),
            boards: RwLock::new(Vec::new()),
            tasks: RwLock::new(Vec::new()),
            delete_policy,
        }
    }
}

impl Store for MemoryStore {
    fn create_user(&self, email: String, password_hash: String) -> Result<User> {
        let mut users = self.users.write().unwrap();

        if users.iter().any(|u| u.email == email) {
            return Err(AppError::DuplicateUser);
        }

        let user = User {
            id: Uuid::new_v4(),
            email,
            password_hash,
            created_at: Utc::now(),
        };
        users.push(user.clone());
        Ok(user)
    }

    fn find_user_by_email(&self, email: &str) -> Option<User> {
        self.users
            .read()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned()
    }

    fn list_boards(&self, owner_id: Uuid) -> Vec<Board> {
        self.boards
            .read()
            .unwrap()
            .iter()
            .filter(|b| b.user_id == owner_id)
            .cloned()
            .collect()
    }

    fn create_board(&self, owner_id: Uuid, name: String) -> Board {
        let board = Board {
            id: Uuid::new_v4(),
            user_id: owner_id,
            name,
        };
        self.boards.write().unwrap().push(board.clone());
        board
    }

    fn rename_board(&self, owner_id: Uuid, board_id: Uuid, name: Option<String>) -> Result<Board> {
        let mut boards = self.boards.write().unwrap();

        let board = boards
            .iter_mut()
            .find(|b| b.id == board_id && b.user_id == owner_id)
            .ok_or(AppError::NotFound("Board"))?;

        // An absent or empty name keeps the current one.
        if let Some(name) = name.filter(|n| !n.is_empty()) {
            board.name = name;
        }

        Ok(board.clone())
    }

    fn delete_board(&self, owner_id: Uuid, board_id: Uuid) -> Result<()> {
        let mut boards = self.boards.write().unwrap();

        let index = boards
            .iter()
            .position(|b| b.id == board_id && b.user_id == owner_id)
            .ok_or(AppError::NotFound("Board"))?;

        boards.remove(index);

        if self.delete_policy == DeletePolicy::Cascade {
            self.tasks
                .write()
                .unwrap()
                .retain(|t| !(t.board_id == board_id && t.user_id == owner_id));
        }

        Ok(())
    }

    fn list_tasks(&self, owner_id: Uuid, board_id: Uuid) -> Vec<Task> {
        self.tasks
            .read()
            .unwrap()
            .iter()
            .filter(|t| t.board_id == board_id && t.user_id == owner_id)
            .cloned()
            .collect()
    }

    fn create_task(&self, owner_id: Uuid, board_id: Uuid, draft: TaskDraft) -> Task {
        let task = Task {
            id: Uuid::new_v4(),
            board_id,
            user_id: owner_id,
            title: draft.title,
            description: draft.description,
            due_date: draft.due_date,
            status: TaskStatus::Pending,
            created_at: Utc::now(),
        };
        self.tasks.write().unwrap().push(task.clone());
        task
    }

    fn update_task(
        &self,
        owner_id: Uuid,
        board_id: Uuid,
        task_id: Uuid,
        patch: TaskPatch,
    ) -> Result<Task> {
        let mut tasks = self.tasks.write().unwrap();

        let task = tasks
            .iter_mut()
            .find(|t| t.id == task_id && t.board_id == board_id && t.user_id == owner_id)
            .ok_or(AppError::NotFound("Task"))?;

        // Nullish merge: only fields present in the patch replace stored
        // values. A present-but-falsy value (empty title) is applied as is.
        if let Some(title) = patch.title {
            task.title = title;
        }
        if let Some(description) = patch.description {
            task.description = Some(description);
        }
        if let Some(due_date) = patch.due_date {
            task.due_date = Some(due_date);
        }
        if let Some(status) = patch.status {
            task.status = status;
        }

        Ok(task.clone())
    }

    fn delete_task(&self, owner_id: Uuid, board_id: Uuid, task_id: Uuid) -> Result<()> {
        let mut tasks = self.tasks.write().unwrap();

        let index = tasks
            .iter()
            .position(|t| t.id == task_id && t.board_id == board_id && t.user_id == owner_id)
            .ok_or(AppError::NotFound("Task"))?;

        tasks.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn store() -> MemoryStore {
        MemoryStore::new(DeletePolicy::Orphan)
    }

    fn draft(title: &str) -> TaskDraft {
        TaskDraft {
            title: title.to_string(),
            description: Some("desc".to_string()),
            due_date: NaiveDate::from_ymd_opt(2026, 9, 1),
        }
    }

    #[test]
    fn duplicate_email_is_rejected_without_mutation() {
        let store = store();
        store
            .create_user("a@x.com".to_string(), "hash1".to_string())
            .unwrap();

        let err = store
            .create_user("a@x.com".to_string(), "hash2".to_string())
            .unwrap_err();
        assert!(matches!(err, AppError::DuplicateUser));

        // The original record is untouched.
        let user = store.find_user_by_email("a@x.com").unwrap();
        assert_eq!(user.password_hash, "hash1");
        assert_eq!(store.users.read().unwrap().len(), 1);
    }

    #[test]
    fn board_listing_is_owner_scoped() {
        let store = store();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        let b1 = store.create_board(alice, "Sprint 1".to_string());
        store.create_board(bob, "Bob's board".to_string());

        let boards = store.list_boards(alice);
        assert_eq!(boards.len(), 1);
        assert_eq!(boards[0].id, b1.id);
    }

    #[test]
    fn rename_of_a_foreign_board_is_not_found() {
        let store = store();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        let board = store.create_board(alice, "Sprint 1".to_string());
        let err = store
            .rename_board(bob, board.id, Some("stolen".to_string()))
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound("Board")));

        // Unchanged for the owner.
        assert_eq!(store.list_boards(alice)[0].name, "Sprint 1");
    }

    #[test]
    fn rename_with_empty_name_keeps_the_old_one() {
        let store = store();
        let alice = Uuid::new_v4();
        let board = store.create_board(alice, "Sprint 1".to_string());

        let renamed = store
            .rename_board(alice, board.id, Some(String::new()))
            .unwrap();
        assert_eq!(renamed.name, "Sprint 1");

        let renamed = store.rename_board(alice, board.id, None).unwrap();
        assert_eq!(renamed.name, "Sprint 1");
    }

    #[test]
    fn delete_of_a_foreign_board_is_not_found() {
        let store = store();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        let board = store.create_board(alice, "Sprint 1".to_string());
        let err = store.delete_board(bob, board.id).unwrap_err();
        assert!(matches!(err, AppError::NotFound("Board")));
        assert_eq!(store.list_boards(alice).len(), 1);
    }

    #[test]
    fn orphan_policy_leaves_tasks_behind() {
        let store = store();
        let alice = Uuid::new_v4();
        let board = store.create_board(alice, "Sprint 1".to_string());
        store.create_task(alice, board.id, draft("Write spec"));

        store.delete_board(alice, board.id).unwrap();

        // Orphaned tasks remain listable under the old board ID.
        assert_eq!(store.list_tasks(alice, board.id).len(), 1);
    }

    #[test]
    fn cascade_policy_removes_tasks_with_the_board() {
        let store = MemoryStore::new(DeletePolicy::Cascade);
        let alice = Uuid::new_v4();
        let board = store.create_board(alice, "Sprint 1".to_string());
        let other = store.create_board(alice, "Sprint 2".to_string());
        store.create_task(alice, board.id, draft("Write spec"));
        store.create_task(alice, other.id, draft("Survives"));

        store.delete_board(alice, board.id).unwrap();

        assert!(store.list_tasks(alice, board.id).is_empty());
        assert_eq!(store.list_tasks(alice, other.id).len(), 1);
    }

    #[test]
    fn new_tasks_default_to_pending() {
        let store = store();
        let alice = Uuid::new_v4();
        let board = store.create_board(alice, "Sprint 1".to_string());

        let task = store.create_task(alice, board.id, draft("Write spec"));
        assert_eq!(task.status, TaskStatus::Pending);
    }

    #[test]
    fn status_only_update_leaves_other_fields_intact() {
        let store = store();
        let alice = Uuid::new_v4();
        let board = store.create_board(alice, "Sprint 1".to_string());
        let task = store.create_task(alice, board.id, draft("Write spec"));

        let patch = TaskPatch {
            status: Some(TaskStatus::Completed),
            ..TaskPatch::default()
        };
        let updated = store.update_task(alice, board.id, task.id, patch).unwrap();

        assert_eq!(updated.status, TaskStatus::Completed);
        assert_eq!(updated.title, task.title);
        assert_eq!(updated.description, task.description);
        assert_eq!(updated.due_date, task.due_date);
        assert_eq!(updated.created_at, task.created_at);
    }

    #[test]
    fn empty_title_in_a_patch_is_applied_as_provided() {
        let store = store();
        let alice = Uuid::new_v4();
        let board = store.create_board(alice, "Sprint 1".to_string());
        let task = store.create_task(alice, board.id, draft("Write spec"));

        let patch = TaskPatch {
            title: Some(String::new()),
            ..TaskPatch::default()
        };
        let updated = store.update_task(alice, board.id, task.id, patch).unwrap();
        assert_eq!(updated.title, "");
    }

    #[test]
    fn task_update_is_board_and_owner_scoped() {
        let store = store();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        let board = store.create_board(alice, "Sprint 1".to_string());
        let task = store.create_task(alice, board.id, draft("Write spec"));

        // Wrong owner.
        let err = store
            .update_task(bob, board.id, task.id, TaskPatch::default())
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound("Task")));

        // Wrong board.
        let err = store
            .update_task(alice, Uuid::new_v4(), task.id, TaskPatch::default())
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound("Task")));
    }

    #[test]
    fn delete_task_removes_only_the_target() {
        let store = store();
        let alice = Uuid::new_v4();
        let board = store.create_board(alice, "Sprint 1".to_string());
        let t1 = store.create_task(alice, board.id, draft("one"));
        let t2 = store.create_task(alice, board.id, draft("two"));

        store.delete_task(alice, board.id, t1.id).unwrap();

        let remaining = store.list_tasks(alice, board.id);
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, t2.id);

        let err = store.delete_task(alice, board.id, t1.id).unwrap_err();
        assert!(matches!(err, AppError::NotFound("Task")));
    }
}
