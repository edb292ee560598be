use std::{thread, time::Duration};

use crossbeam_channel::select;
use fraktor_queue_rs::{BatchError, BoundedQueue, DEFAULT_PRIORITY, QueueConfig, QueueError};

#[derive(Clone, Debug, PartialEq, Eq)]
struct Job {
  id:   u32,
  name: &'static str,
}

impl Job {
  const fn new(id: u32, name: &'static str) -> Self {
    Self { id, name }
  }
}

#[test]
fn producer_consumer_pipeline_respects_priorities() {
  let queue: BoundedQueue<Job> = BoundedQueue::from_config(QueueConfig::new(16));
  let signal = queue.signal().expect("signalling queue exposes a receiver");
  let (done_tx, done_rx) = crossbeam_channel::bounded::<()>(0);

  let processed = thread::scope(|scope| {
    let worker = scope.spawn(|| {
      let mut processed = Vec::new();
      loop {
        select! {
          recv(signal) -> message => {
            if message.is_err() {
              return processed;
            }
            while let Ok((job, priority)) = queue.dequeue_with_priority() {
              processed.push((job.id, priority));
            }
          },
          recv(done_rx) -> _ => {
            while let Ok((job, priority)) = queue.dequeue_with_priority() {
              processed.push((job.id, priority));
            }
            return processed;
          },
        }
      }
    });

    queue
      .enqueue_multiple_with_priority([(Job::new(1, "index"), 1), (Job::new(2, "compact"), 5), (Job::new(3, "gc"), 1)])
      .unwrap();
    thread::sleep(Duration::from_millis(20));
    queue.enqueue(Job::new(4, "report")).unwrap();
    drop(done_tx);
    worker.join().unwrap()
  });

  let ids: Vec<u32> = processed.iter().map(|(id, _)| *id).collect();
  assert_eq!(ids.len(), 4);
  assert!(ids.contains(&4));
  let first_batch: Vec<u32> = ids.iter().copied().filter(|id| *id != 4).collect();
  assert_eq!(first_batch, vec![2, 1, 3]);
  assert!(processed.contains(&(4, DEFAULT_PRIORITY)));
}

#[test]
fn overflow_hands_work_back_for_retry() {
  let queue: BoundedQueue<Job> = BoundedQueue::new(2, true);
  let jobs = vec![Job::new(1, "a"), Job::new(2, "b"), Job::new(3, "c")];

  let rejected = match queue.enqueue_multiple(jobs) {
    | Err(BatchError::Overflow { inserted, rejected }) => {
      assert_eq!(inserted, 2);
      rejected
    },
    | other => panic!("expected overflow, got {other:?}"),
  };
  assert_eq!(rejected, vec![Job::new(3, "c")]);

  let drained = queue.dequeue_multiple(2).unwrap();
  assert_eq!(drained.iter().map(|job| job.name).collect::<Vec<_>>(), vec!["a", "b"]);
  for job in rejected {
    queue.enqueue(job).unwrap();
  }
  assert_eq!(queue.peek_head().map(|job| job.id), Some(3));
}

#[test]
fn resize_hands_back_contents_and_close_makes_queue_inert() {
  let queue: BoundedQueue<u32> = BoundedQueue::new(0, false);
  assert_eq!(queue.size(), 1);
  queue.enqueue(10).unwrap();
  assert_eq!(queue.enqueue(11), Err(QueueError::Overflow(11)));

  let previous: Vec<u32> = queue.resize(3).into_iter().map(|container| container.into_element()).collect();
  assert_eq!(previous, vec![10]);
  assert_eq!((queue.len(), queue.size()), (0, 3));

  queue.close();
  assert_eq!(queue.enqueue(12), Err(QueueError::Overflow(12)));
  assert_eq!(queue.dequeue(), Err(QueueError::Underflow));
  assert_eq!(queue.peek_tail(), None);
  assert_eq!((queue.len(), queue.size()), (0, 0));
}
