use super::DbPool;
use crate::errors::StorageError;
use diesel::SqliteConnection;
use fittrack_core::errors::{DatabaseError, Error, Result};
use log::{debug, error};
use std::any::Any;
use tokio::sync::{mpsc, oneshot};

// A write job runs against the writer's connection and reports a core Result.
type Job<T> = Box<dyn FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static>;

type ErasedJob = Job<Box<dyn Any + Send + 'static>>;
type Reply = oneshot::Sender<Result<Box<dyn Any + Send + 'static>>>;

/// Handle for sending jobs to the writer actor.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<(ErasedJob, Reply)>,
}

impl WriteHandle {
    /// Runs `job` on the writer actor inside one `BEGIN IMMEDIATE` transaction.
    ///
    /// Either every statement of the job commits or none does. An `Err`
    /// returned from the job rolls the transaction back.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static + Any,
    {
        let (ret_tx, ret_rx) = oneshot::channel();

        self.tx
            .send((
                Box::new(move |c| job(c).map(|v| Box::new(v) as Box<dyn Any + Send>)),
                ret_tx,
            ))
            .await
            .map_err(|_| {
                Error::Database(DatabaseError::Internal(
                    "Writer actor is no longer running".to_string(),
                ))
            })?;

        let boxed = ret_rx.await.map_err(|_| {
            Error::Database(DatabaseError::Internal(
                "Writer actor dropped the reply without a result".to_string(),
            ))
        })??;

        boxed
            .downcast::<T>()
            .map(|v| *v)
            .map_err(|_| Error::Unexpected("Failed to downcast writer actor result".to_string()))
    }
}

/// Spawns a background Tokio task that is the single writer to the database.
///
/// Jobs are processed one at a time. Each job checks a connection out of the
/// pool for its own duration, so a broken connection never outlives a job.
pub fn spawn_writer(pool: DbPool) -> WriteHandle {
    let (tx, mut rx) = mpsc::channel::<(ErasedJob, Reply)>(1024);

    tokio::spawn(async move {
        while let Some((job, reply_tx)) = rx.recv().await {
            let result = run_job(&pool, job);
            if let Err(e) = &result {
                debug!("Write job failed: {}", e);
            }
            // The requester may have gone away; nothing to do then.
            let _ = reply_tx.send(result);
        }
        debug!("Writer actor stopped: all handles dropped");
    });

    WriteHandle { tx }
}

fn run_job(pool: &DbPool, job: ErasedJob) -> Result<Box<dyn Any + Send + 'static>> {
    let mut conn = pool.get().map_err(|e| {
        error!("Writer actor could not check out a connection: {}", e);
        StorageError::from(e)
    })?;

    conn.immediate_transaction::<_, StorageError, _>(|c| job(c).map_err(StorageError::from))
        .map_err(Error::from)
}
