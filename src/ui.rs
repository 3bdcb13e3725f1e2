use crate::models::SessionView;

pub fn render_index(session: &SessionView) -> String {
    INDEX_HTML
        .replace("{{SCRIPT}}", &escape_html(&session.phrase.script))
        .replace("{{NAME}}", &escape_html(&session.phrase.name))
        .replace("{{COUNT}}", &session.count.to_string())
        .replace("{{TARGET}}", &session.target.to_string())
}

fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Qalbify Counter</title>
  <style>
    :root {
      --bg-1: #eef6f1;
      --bg-2: #cfe8dc;
      --ink: #1f2a26;
      --accent: #1f7a5a;
      --accent-2: #1d6f7a;
      --gold: #b7862b;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(29, 111, 122, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #f4faf6 60%, #eef6f1 100%);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(760px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header h1 {
      margin: 0;
      font-family: "Georgia", serif;
      color: var(--accent);
    }

    .subtitle {
      margin: 0;
      color: #5c6b65;
    }

    .script {
      font-size: 2.4rem;
      text-align: center;
      color: var(--accent);
      margin: 0;
    }

    .counter {
      display: grid;
      gap: 12px;
      text-align: center;
    }

    .count {
      font-size: 4.5rem;
      font-weight: 700;
      color: var(--accent-2);
    }

    .count.done {
      color: var(--gold);
    }

    .progress {
      height: 6px;
      background: rgba(31, 122, 90, 0.12);
      border-radius: 999px;
      overflow: hidden;
    }

    .progress > div {
      height: 100%;
      width: 0;
      background: linear-gradient(90deg, var(--accent), var(--accent-2));
      transition: width 200ms ease;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: rgba(31, 122, 90, 0.1);
      color: var(--accent);
    }

    button.primary {
      background: linear-gradient(135deg, var(--accent), var(--accent-2));
      color: white;
      padding: 36px 20px;
      font-size: 1.3rem;
      border-radius: 20px;
    }

    button:disabled {
      opacity: 0.6;
      cursor: not-allowed;
    }

    .tabs {
      display: flex;
      flex-wrap: wrap;
      gap: 6px;
    }

    .tab.active {
      background: var(--accent);
      color: white;
    }

    .grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 12px;
    }

    .card {
      background: white;
      border-radius: 16px;
      padding: 14px;
      border: 1px solid rgba(31, 122, 90, 0.12);
      cursor: pointer;
    }

    .card.selected {
      border-color: var(--accent-2);
      background: rgba(29, 111, 122, 0.06);
    }

    .card .card-script {
      font-size: 1.3rem;
      color: var(--accent);
    }

    .card .label {
      font-size: 0.8rem;
      color: #7a857f;
    }

    form {
      display: grid;
      gap: 8px;
    }

    input, textarea {
      font: inherit;
      padding: 10px;
      border-radius: 12px;
      border: 1px solid rgba(31, 122, 90, 0.25);
    }

    ul.plain {
      list-style: none;
      padding: 0;
      margin: 0;
      display: grid;
      gap: 6px;
    }

    .status {
      min-height: 1.2em;
      color: #5c6b65;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    .hidden {
      display: none;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Qalbify Counter</h1>
      <p class="subtitle">Remember Allah with every count</p>
    </header>

    <section>
      <div id="pack-tabs" class="tabs" role="tablist"></div>
      <div id="pack-items" class="grid"></div>
      <form id="custom-form" class="hidden">
        <textarea id="custom-script" dir="rtl" placeholder="Script"></textarea>
        <input id="custom-name" placeholder="Name" />
        <input id="custom-gloss" placeholder="Transliteration / meaning" />
        <input id="custom-target" type="number" min="1" max="10000" value="33" />
        <button type="submit">Add phrase</button>
      </form>
    </section>

    <section>
      <div id="targets" class="tabs"></div>
      <form id="target-form">
        <input id="target-input" type="number" min="1" max="10000" placeholder="Custom target (1-10000)" />
        <button type="submit">Set target</button>
      </form>
    </section>

    <section class="counter">
      <p id="script" class="script" dir="rtl">{{SCRIPT}}</p>
      <p id="name" class="subtitle">{{NAME}}</p>
      <div class="progress"><div id="progress"></div></div>
      <div id="count" class="count">{{COUNT}}</div>
      <div class="subtitle">Target: <span id="target">{{TARGET}}</span></div>
      <button id="tap" class="primary" type="button">Tap to Count</button>
      <button id="reset" type="button">Reset Counter</button>
    </section>

    <section id="stats" class="hidden">
      <div class="tabs">
        <button class="tab active" data-view="overview" type="button">Overview</button>
        <button class="tab" data-view="top" type="button">Top Zikr</button>
      </div>
      <div id="stats-overview" class="grid"></div>
      <p id="stats-sessions" class="subtitle"></p>
      <ol id="stats-top" class="hidden"></ol>
    </section>

    <section>
      <div class="tabs">
        <h2 class="subtitle">History</h2>
        <button id="clear-history" type="button">Clear</button>
      </div>
      <div id="history"></div>
    </section>

    <p id="status" class="status" role="status"></p>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    let packs = [];
    let activePack = 'common';
    let session = null;

    const setStatus = (text, type) => {
      statusEl.textContent = text;
      statusEl.dataset.type = type || '';
    };

    const api = async (path, options = {}) => {
      const res = await fetch(path, {
        headers: { 'content-type': 'application/json' },
        ...options
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.status === 204 ? null : res.json();
    };

    const el = (tag, text, className) => {
      const node = document.createElement(tag);
      if (text !== undefined) node.textContent = text;
      if (className) node.className = className;
      return node;
    };

    const renderSession = () => {
      document.getElementById('script').textContent = session.phrase.script;
      document.getElementById('name').textContent = session.phrase.name;
      document.getElementById('target').textContent = session.target;
      const countEl = document.getElementById('count');
      countEl.textContent = session.count;
      const done = session.state === 'completed';
      countEl.classList.toggle('done', done);
      const tap = document.getElementById('tap');
      tap.disabled = done;
      tap.textContent = done ? 'Completed' : 'Tap to Count';
      const pct = Math.min(100, (session.count / session.target) * 100);
      document.getElementById('progress').style.width = `${pct}%`;
      renderPacks();
    };

    const renderPacks = () => {
      const tabs = document.getElementById('pack-tabs');
      tabs.replaceChildren(...packs.map((pack) => {
        const button = el('button', pack.name, pack.id === activePack ? 'tab active' : 'tab');
        button.type = 'button';
        button.addEventListener('click', () => {
          activePack = pack.id;
          renderPacks();
        });
        return button;
      }));

      const pack = packs.find((p) => p.id === activePack);
      const items = document.getElementById('pack-items');
      items.replaceChildren(...(pack ? pack.items : []).map((phrase) => {
        const selected = session && session.phrase.id === phrase.id;
        const card = el('div', undefined, selected ? 'card selected' : 'card');
        card.append(
          el('div', phrase.script, 'card-script'),
          el('div', phrase.name),
          el('div', phrase.gloss, 'label'),
          el('div', `Target: ${phrase.defaultTarget}`, 'label')
        );
        card.addEventListener('click', () => selectPhrase(phrase.id));
        if (activePack === 'custom') {
          const remove = el('button', 'Delete');
          remove.type = 'button';
          remove.addEventListener('click', (event) => {
            event.stopPropagation();
            deletePhrase(phrase.id);
          });
          card.append(remove);
        }
        return card;
      }));
      document.getElementById('custom-form').classList.toggle('hidden', activePack !== 'custom');
    };

    const renderStats = (stats) => {
      const section = document.getElementById('stats');
      section.classList.toggle('hidden', stats.totalSessions === 0);
      const overview = document.getElementById('stats-overview');
      overview.replaceChildren(...[
        ['Today', stats.today],
        ['This Week', stats.week],
        ['This Month', stats.month],
        ['All Time', stats.total]
      ].map(([label, value]) => {
        const card = el('div', undefined, 'card');
        card.append(el('div', label, 'label'), el('div', value.toLocaleString()));
        return card;
      }));
      document.getElementById('stats-sessions').textContent =
        `${stats.totalSessions} total sessions completed`;
      document.getElementById('stats-top').replaceChildren(
        ...stats.topPhrases.map((item) => el('li', `${item.name}: ${item.count.toLocaleString()}`))
      );
    };

    const renderHistory = (history) => {
      const root = document.getElementById('history');
      document.getElementById('clear-history').classList.toggle('hidden', history.entries.length === 0);
      if (history.days.length === 0) {
        root.replaceChildren(el('p', 'No history yet. Complete a Zikr to see it here.', 'subtitle'));
        return;
      }
      root.replaceChildren(...history.days.map((day) => {
        const block = el('div');
        const list = el('ul', undefined, 'plain');
        list.append(...day.entries.map((entry) => {
          const time = new Date(entry.completedAt).toLocaleTimeString();
          return el('li', `${time} · ${entry.phraseName} · ${entry.count}/${entry.target}`);
        }));
        block.append(el('h3', day.date, 'subtitle'), list);
        return block;
      }));
    };

    const refreshRecords = async () => {
      const [history, stats] = await Promise.all([api('/api/history'), api('/api/stats')]);
      renderHistory(history);
      renderStats(stats);
    };

    const refresh = async () => {
      const [loadedPacks, loadedSession, targets] = await Promise.all([
        api('/api/packs'),
        api('/api/session'),
        api('/api/targets')
      ]);
      packs = loadedPacks;
      session = loadedSession;
      renderTargets(targets.presets);
      renderSession();
      await refreshRecords();
    };

    const renderTargets = (presets) => {
      document.getElementById('targets').replaceChildren(...presets.map((value) => {
        const button = el('button', String(value), 'tab');
        button.type = 'button';
        button.addEventListener('click', () => setTarget(value).catch((err) => setStatus(err.message, 'error')));
        return button;
      }));
    };

    const setTarget = async (target) => {
      session = await api('/api/session/target', {
        method: 'POST',
        body: JSON.stringify({ target })
      });
      renderSession();
    };

    const selectPhrase = async (phraseId) => {
      try {
        session = await api('/api/session/phrase', {
          method: 'POST',
          body: JSON.stringify({ phraseId })
        });
        renderSession();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    const deletePhrase = async (id) => {
      try {
        await api(`/api/phrases/${encodeURIComponent(id)}`, { method: 'DELETE' });
        packs = await api('/api/packs');
        renderPacks();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    document.getElementById('tap').addEventListener('click', async () => {
      try {
        const res = await api('/api/session/increment', { method: 'POST' });
        session = res.session;
        renderSession();
        if (res.recorded) {
          setStatus('Alhamdulillah! Session completed.', 'ok');
          await refreshRecords();
        }
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    document.getElementById('reset').addEventListener('click', async () => {
      try {
        session = await api('/api/session/reset', { method: 'POST' });
        renderSession();
        setStatus('', '');
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    document.getElementById('target-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const input = document.getElementById('target-input');
      setTarget(Number.parseInt(input.value, 10))
        .then(() => { input.value = ''; })
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('custom-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      const field = (id) => document.getElementById(id).value;
      try {
        await api('/api/phrases', {
          method: 'POST',
          body: JSON.stringify({
            name: field('custom-name'),
            script: field('custom-script'),
            gloss: field('custom-gloss'),
            defaultTarget: Number.parseInt(field('custom-target'), 10)
          })
        });
        event.target.reset();
        packs = await api('/api/packs');
        renderPacks();
        setStatus('Custom Zikr added', 'ok');
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    document.getElementById('clear-history').addEventListener('click', async () => {
      try {
        await api('/api/history', { method: 'DELETE' });
        await refreshRecords();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    document.querySelectorAll('#stats .tab').forEach((button) => {
      button.addEventListener('click', () => {
        document.querySelectorAll('#stats .tab').forEach((b) => b.classList.toggle('active', b === button));
        const top = button.dataset.view === 'top';
        document.getElementById('stats-overview').classList.toggle('hidden', top);
        document.getElementById('stats-sessions').classList.toggle('hidden', top);
        document.getElementById('stats-top').classList.toggle('hidden', !top);
      });
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
