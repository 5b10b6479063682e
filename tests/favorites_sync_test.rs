mod common;

#[cfg(test)]
mod favorites_sync_tests {
    use super::common::MockCatalog;
    use camlet::constants::FAVORITES_STORAGE_KEY;
    use camlet::prelude::*;

    fn memory_store(json: &str) -> Arc<FavoriteStore> {
        Arc::new(FavoriteStore::new(Arc::new(MemoryStore::with_entry(
            FAVORITES_STORAGE_KEY,
            json,
        ))))
    }

    #[tokio::test]
    async fn test_unchanged_favorites_fetch_once() {
        let api = Arc::new(MockCatalog::default());
        let store = memory_store(r#"["c1","c2","c3"]"#);
        let mut screen = MyCamerasScreen::new(store, api.clone());
        let focus = ScreenFocus::new();

        let first = screen.on_focus(&focus.focus()).await;
        assert!(first.needs_fetch());
        assert_eq!(screen.cameras().len(), 3);

        let second = screen.on_focus(&focus.focus()).await;
        assert_eq!(second, Reconciliation::Unchanged);
        assert_eq!(api.id_batches().len(), 1, "unchanged set must not refetch");
    }

    #[tokio::test]
    async fn test_titles_are_normalized_once() {
        let api = Arc::new(MockCatalog::default());
        let mut screen = MyCamerasScreen::new(memory_store(r#"["c1"]"#), api);
        screen.on_focus(&CancellationToken::new()).await;
        assert_eq!(screen.cameras()[0].title, "Cam c1");
    }

    #[tokio::test]
    async fn test_add_on_detail_screen_triggers_refetch() {
        let api = Arc::new(MockCatalog::default());
        let store = memory_store(r#"["c1"]"#);
        let mut screen = MyCamerasScreen::new(store.clone(), api.clone());
        let token = CancellationToken::new();

        screen.on_focus(&token).await;
        store.add("c9").await.unwrap();

        let outcome = screen.on_focus(&token).await;
        assert!(outcome.needs_fetch());
        assert_eq!(screen.favorites().as_slice(), ["c9", "c1"]);
        let ids: Vec<_> = screen.cameras().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["c9", "c1"]);
        assert_eq!(api.id_batches().len(), 2);
    }

    #[tokio::test]
    async fn test_removing_last_favorite_clears_without_fetch() {
        let api = Arc::new(MockCatalog::default());
        let store = memory_store(r#"["c1"]"#);
        let mut screen = MyCamerasScreen::new(store.clone(), api.clone());
        let token = CancellationToken::new();

        screen.on_focus(&token).await;
        store.remove("c1").await.unwrap();

        assert_eq!(screen.on_focus(&token).await, Reconciliation::Cleared);
        assert!(screen.cameras().is_empty());
        assert_eq!(api.id_batches().len(), 1);
    }

    #[tokio::test]
    async fn test_large_set_is_batched() {
        let api = Arc::new(MockCatalog::default());
        let store = Arc::new(FavoriteStore::new(Arc::new(MemoryStore::new())));
        for i in 0..53 {
            store.add(&format!("c{i}")).await.unwrap();
        }

        let mut screen = MyCamerasScreen::new(store, api.clone());
        screen.on_focus(&CancellationToken::new()).await;

        let sizes: Vec<_> = api.id_batches().iter().map(Vec::len).collect();
        assert_eq!(sizes, [25, 25, 3]);
        assert_eq!(screen.cameras().len(), 53);
        assert_eq!(screen.cameras()[0].id, "c52", "most recent favorite first");
    }

    #[tokio::test]
    async fn test_batch_requests_cover_requested_ids() {
        for cap in [1, 7, 25] {
            for n in [0usize, 1, 6, 7, 8, 24, 25, 26, 80] {
                let api = Arc::new(MockCatalog::default());
                let scheduler = BatchFetchScheduler::with_cap(api.clone(), cap);
                let ids: FavoriteIdSet = (0..n).map(|i| format!("c{i}")).collect();

                let cameras = scheduler
                    .fetch(&ids, &CancellationToken::new())
                    .await
                    .unwrap();

                assert_eq!(api.id_batches().len(), n.div_ceil(cap), "n={n} cap={cap}");
                assert!(api.id_batches().iter().all(|batch| batch.len() <= cap));
                let returned: HashSet<_> = cameras.iter().map(|c| c.id.clone()).collect();
                let requested: HashSet<_> = ids.iter().map(str::to_string).collect();
                assert_eq!(returned, requested);
            }
        }
    }

    #[tokio::test]
    async fn test_failed_batch_keeps_previous_list_and_retries() {
        let api = Arc::new(MockCatalog::default());
        let store = memory_store(r#"["c1"]"#);
        let mut screen = MyCamerasScreen::new(store.clone(), api.clone());
        let token = CancellationToken::new();

        screen.on_focus(&token).await;
        assert_eq!(screen.cameras().len(), 1);

        store.add("c2").await.unwrap();
        api.set_fail_ids(true);
        screen.on_focus(&token).await;
        assert!(screen.has_failed());
        assert!(!screen.is_loading());
        assert_eq!(screen.cameras().len(), 1, "no partial display after failure");

        api.set_fail_ids(false);
        assert!(screen.on_focus(&token).await.needs_fetch());
        assert!(!screen.has_failed());
        assert_eq!(screen.cameras().len(), 2);
    }

    #[tokio::test]
    async fn test_blurred_screen_ignores_result() {
        let api = Arc::new(MockCatalog::default());
        let mut screen = MyCamerasScreen::new(memory_store(r#"["c1"]"#), api.clone());
        let focus = ScreenFocus::new();

        let token = focus.handle(FocusEvent::Focused).unwrap();
        focus.handle(FocusEvent::Blurred);

        assert_eq!(screen.on_focus(&token).await, Reconciliation::Stale);
        assert!(screen.cameras().is_empty());
        assert!(api.id_batches().is_empty());

        let outcome = screen.on_focus(&focus.focus()).await;
        assert!(outcome.needs_fetch());
    }

    #[tokio::test]
    async fn test_favorites_survive_restart() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = FavoriteStore::new(Arc::new(FileStore::new(dir.path())));
            store.add("c1").await.unwrap();
            store.add("c2").await.unwrap();
            store.remove("c1").await.unwrap();
            store.add("c3").await.unwrap();
        }

        let store = Arc::new(FavoriteStore::new(Arc::new(FileStore::new(dir.path()))));
        assert_eq!(store.load().await.as_slice(), ["c3", "c2"]);

        let api = Arc::new(MockCatalog::default());
        let mut screen = MyCamerasScreen::new(store, api);
        screen.on_focus(&CancellationToken::new()).await;
        assert_eq!(screen.cameras().len(), 2);
    }

    #[tokio::test]
    async fn test_corrupt_record_reads_as_no_favorites() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("favoriteCameraIds.json"), "[1, 2").unwrap();

        let store = Arc::new(FavoriteStore::new(Arc::new(FileStore::new(dir.path()))));
        let api = Arc::new(MockCatalog::default());
        let mut screen = MyCamerasScreen::new(store.clone(), api);
        assert_eq!(
            screen.on_focus(&CancellationToken::new()).await,
            Reconciliation::Cleared
        );

        store.add("c1").await.unwrap();
        assert_eq!(store.reload().await.as_slice(), ["c1"]);
    }

    #[tokio::test]
    async fn test_toggle_from_detail_screen() {
        let api = Arc::new(MockCatalog::default());
        let store = memory_store(r#"["c1"]"#);
        let mut screen = MyCamerasScreen::new(store.clone(), api);
        let token = CancellationToken::new();
        screen.on_focus(&token).await;

        assert!(screen.toggle_favorite("c2").await.unwrap());
        assert!(!screen.toggle_favorite("c1").await.unwrap());
        assert!(store.contains("c2").await);

        assert!(screen.on_focus(&token).await.needs_fetch());
        let ids: Vec<_> = screen.cameras().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["c2"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_blur_during_refetch_keeps_previous_list() {
        let api = Arc::new(MockCatalog::default());
        let store = memory_store(r#"["c1"]"#);
        let mut screen = MyCamerasScreen::new(store.clone(), api.clone());
        screen.on_focus(&CancellationToken::new()).await;

        store.add("c2").await.unwrap();
        api.set_delay(Some(Duration::from_millis(200)));
        let token = CancellationToken::new();
        let blur = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            blur.cancel();
        });

        screen.on_focus(&token).await;
        assert_eq!(api.id_batches().len(), 2);
        let ids: Vec<_> = screen.cameras().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["c1"], "cancelled refetch must not replace the list");
        assert!(!screen.is_loading());
        assert!(!screen.has_failed());

        api.set_delay(None);
        assert!(screen.on_focus(&CancellationToken::new()).await.needs_fetch());
        assert_eq!(screen.cameras().len(), 2);
    }
}
